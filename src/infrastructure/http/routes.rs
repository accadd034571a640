//! HTTP Routes
//!
//! API Endpoints:
//! - /students          POST    创建学生
//! - /students          GET     列出所有学生
//! - /students          DELETE  删除所有学生
//! - /students/:id      GET     获取学生详情
//! - /students/:id      PUT     更新学生
//! - /students/:id      DELETE  删除学生
//! - /api/ping          GET     健康检查
//!
//! 学生路由同时挂在 /api 前缀下（/api/students ...）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(student_routes())
        .nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(student_routes())
}

/// Student 路由
fn student_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/students",
            post(handlers::create_student)
                .get(handlers::list_students)
                .delete(handlers::delete_all_students),
        )
        .route(
            "/students/:id",
            get(handlers::get_student)
                .put(handlers::update_student)
                .delete(handlers::delete_student),
        )
}
