//! Student HTTP Handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{
    CreateStudent, DeleteAllStudents, DeleteStudent, GetStudent, ListStudents, UpdateStudent,
};
use crate::infrastructure::http::dto::{
    CreatedResponse, StudentId, StudentRequest, StudentResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

const STUDENT_DELETED: &str = "student deleted successfully";
const ALL_STUDENTS_DELETED: &str = "deleted all students successfully";

/// 创建学生
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let (name, email, age) = StudentRequest::decode(&body?)?.into_parts();

    let id = state
        .create_student_handler
        .handle(CreateStudent { name, email, age })
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// 获取学生详情
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    StudentId(student_id): StudentId,
) -> Result<Json<StudentResponse>, ApiError> {
    let student = state
        .get_student_handler
        .handle(GetStudent { student_id })
        .await?;

    Ok(Json(StudentResponse::from(student)))
}

/// 获取学生列表
pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = state.list_students_handler.handle(ListStudents).await?;

    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}

/// 更新学生（整体覆盖）
pub async fn update_student(
    State(state): State<Arc<AppState>>,
    StudentId(student_id): StudentId,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    let (name, email, age) = StudentRequest::decode(&body?)?.into_parts();

    let student = state
        .update_student_handler
        .handle(UpdateStudent {
            student_id,
            name,
            email,
            age,
        })
        .await?;

    Ok(Json(StudentResponse::from(student)))
}

/// 删除学生
pub async fn delete_student(
    State(state): State<Arc<AppState>>,
    StudentId(student_id): StudentId,
) -> Result<Json<&'static str>, ApiError> {
    state
        .delete_student_handler
        .handle(DeleteStudent { student_id })
        .await?;

    Ok(Json(STUDENT_DELETED))
}

/// 删除所有学生
pub async fn delete_all_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<&'static str>, ApiError> {
    state
        .delete_all_students_handler
        .handle(DeleteAllStudents)
        .await?;

    Ok(Json(ALL_STUDENTS_DELETED))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::infrastructure::http::{create_routes, AppState};
    use crate::infrastructure::memory::InMemoryStudentRepository;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteStudentRepository,
    };

    async fn sqlite_app() -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let state = AppState::new(Arc::new(SqliteStudentRepository::new(pool)));
        create_routes().with_state(Arc::new(state))
    }

    fn memory_app() -> Router {
        let state = AppState::new(InMemoryStudentRepository::new().arc());
        create_routes().with_state(Arc::new(state))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn alice() -> Value {
        json!({"name": "Alice", "email": "alice@example.com", "age": 20})
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = sqlite_app().await;

        let (status, body) = send(&app, Method::POST, "/students", Some(alice())).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_i64().unwrap();
        assert!(id > 0);

        let (status, body) = send(&app, Method::GET, &format!("/students/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": id, "name": "Alice", "email": "alice@example.com", "age": 20})
        );
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let app = memory_app();

        let mut payload = alice();
        payload["id"] = json!(999);
        let (status, body) = send(&app, Method::POST, "/students", Some(payload)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], json!(1));
    }

    #[tokio::test]
    async fn test_create_empty_body() {
        let app = memory_app();

        let (status, body) = send(&app, Method::POST, "/students", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"Status": "Error", "Error": "empty body"}));
    }

    #[tokio::test]
    async fn test_create_malformed_json() {
        let app = memory_app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/students")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["Status"], "Error");
        assert!(body["Error"].as_str().unwrap().starts_with("decode error"));
    }

    #[tokio::test]
    async fn test_create_missing_name() {
        let app = memory_app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/students",
            Some(json!({"name": "", "email": "a@b.com", "age": 5})),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"Status": "Error", "Error": "field Name is required"})
        );
    }

    #[tokio::test]
    async fn test_create_lists_every_missing_field() {
        let app = memory_app();

        let (status, body) = send(&app, Method::POST, "/students", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["Error"],
            "field Email is required, field Name is required, field Age is required"
        );
    }

    #[tokio::test]
    async fn test_get_missing_student_is_internal_error() {
        let app = sqlite_app().await;

        let (status, body) = send(&app, Method::GET, "/students/12345", None).await;

        // 未找到按存储错误处理，返回 500 而不是 404
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"Status": "Error", "Error": "student not found with id 12345"})
        );
    }

    #[tokio::test]
    async fn test_malformed_id_is_bad_request_and_server_keeps_serving() {
        let app = memory_app();

        for method in [Method::GET, Method::DELETE] {
            let (status, body) = send(&app, method, "/students/abc", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({"Status": "Error", "Error": "invalid id: abc"}));
        }

        let (status, _) = send(&app, Method::PUT, "/students/1.5", Some(alice())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        // 非 UTF-8 的 id 同样返回错误信封
        let (status, body) = send(&app, Method::GET, "/students/%FF", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"Status": "Error", "Error": "invalid id: %FF"}));

        let (status, _) = send(&app, Method::GET, "/students", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_null_body_reports_every_field() {
        let app = memory_app();

        let (status, body) = send(&app, Method::POST, "/students", Some(Value::Null)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["Error"],
            "field Email is required, field Name is required, field Age is required"
        );
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        let app = sqlite_app().await;

        let (status, body) = send(&app, Method::GET, "/students", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let app = sqlite_app().await;
        let (_, created) = send(&app, Method::POST, "/students", Some(alice())).await;
        let id = created["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            Method::PUT,
            &format!("/students/{}", id),
            Some(json!({"name": "Alicia", "email": "alicia@example.com", "age": 21})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"id": id, "name": "Alicia", "email": "alicia@example.com", "age": 21})
        );

        let (_, fetched) = send(&app, Method::GET, &format!("/students/{}", id), None).await;
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn test_update_missing_student() {
        let app = sqlite_app().await;

        let (status, body) = send(&app, Method::PUT, "/students/77", Some(alice())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"Status": "Error", "Error": "no rows affected"}));
    }

    #[tokio::test]
    async fn test_update_validation_and_empty_body() {
        let app = memory_app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/students/1",
            Some(json!({"name": "Bob", "email": "bob@example.com", "age": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], "field Age is required");

        let (status, body) = send(&app, Method::PUT, "/students/1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], "empty body");
    }

    #[tokio::test]
    async fn test_delete_by_id() {
        let app = sqlite_app().await;
        let (_, created) = send(&app, Method::POST, "/students", Some(alice())).await;
        let uri = format!("/students/{}", created["id"]);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("student deleted successfully"));

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        // 重复删除仍然成功
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_all_then_list() {
        let app = sqlite_app().await;
        send(&app, Method::POST, "/students", Some(alice())).await;
        send(
            &app,
            Method::POST,
            "/students",
            Some(json!({"name": "Bob", "email": "bob@example.com", "age": 30})),
        )
        .await;

        let (status, body) = send(&app, Method::DELETE, "/students", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!("deleted all students successfully"));

        let (status, body) = send(&app, Method::GET, "/students", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_get_all_contains_exactly_created_record() {
        let app = sqlite_app().await;
        let (_, created) = send(&app, Method::POST, "/students", Some(alice())).await;

        let (status, body) = send(&app, Method::GET, "/students", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"id": created["id"], "name": "Alice", "email": "alice@example.com", "age": 20}])
        );
    }

    #[tokio::test]
    async fn test_api_prefix_routes() {
        let app = memory_app();

        let (status, body) = send(&app, Method::POST, "/api/students", Some(alice())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = send(&app, Method::GET, &format!("/api/students/{}", body["id"]), None).await;
        assert_eq!(status, StatusCode::OK);
    }
}
