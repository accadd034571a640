//! Student Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{StudentRecord, StudentRepositoryPort};
use crate::application::queries::{GetStudent, ListStudents};

/// GetStudent Handler
pub struct GetStudentHandler {
    student_repo: Arc<dyn StudentRepositoryPort>,
}

impl GetStudentHandler {
    pub fn new(student_repo: Arc<dyn StudentRepositoryPort>) -> Self {
        Self { student_repo }
    }

    pub async fn handle(&self, query: GetStudent) -> Result<StudentRecord, ApplicationError> {
        tracing::debug!(student_id = query.student_id, "Getting student");
        Ok(self.student_repo.find_by_id(query.student_id).await?)
    }
}

/// ListStudents Handler
pub struct ListStudentsHandler {
    student_repo: Arc<dyn StudentRepositoryPort>,
}

impl ListStudentsHandler {
    pub fn new(student_repo: Arc<dyn StudentRepositoryPort>) -> Self {
        Self { student_repo }
    }

    pub async fn handle(&self, _query: ListStudents) -> Result<Vec<StudentRecord>, ApplicationError> {
        Ok(self.student_repo.find_all().await?)
    }
}
