//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态，所有请求共享同一个仓储实例

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateStudentHandler, DeleteAllStudentsHandler, DeleteStudentHandler, UpdateStudentHandler,
    // Query handlers
    GetStudentHandler, ListStudentsHandler,
    // Ports
    StudentRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_student_handler: CreateStudentHandler,
    pub update_student_handler: UpdateStudentHandler,
    pub delete_student_handler: DeleteStudentHandler,
    pub delete_all_students_handler: DeleteAllStudentsHandler,

    // ========== Query Handlers ==========
    pub get_student_handler: GetStudentHandler,
    pub list_students_handler: ListStudentsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(student_repo: Arc<dyn StudentRepositoryPort>) -> Self {
        Self {
            // Command handlers
            create_student_handler: CreateStudentHandler::new(student_repo.clone()),
            update_student_handler: UpdateStudentHandler::new(student_repo.clone()),
            delete_student_handler: DeleteStudentHandler::new(student_repo.clone()),
            delete_all_students_handler: DeleteAllStudentsHandler::new(student_repo.clone()),

            // Query handlers
            get_student_handler: GetStudentHandler::new(student_repo.clone()),
            list_students_handler: ListStudentsHandler::new(student_repo),
        }
    }
}
