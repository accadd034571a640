//! Student Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateStudent, DeleteAllStudents, DeleteStudent, UpdateStudent};
use crate::application::error::ApplicationError;
use crate::application::ports::{StudentRecord, StudentRepositoryPort};
use crate::domain::student::StudentProfile;

// ============================================================================
// CreateStudent
// ============================================================================

/// CreateStudent Handler
pub struct CreateStudentHandler {
    student_repo: Arc<dyn StudentRepositoryPort>,
}

impl CreateStudentHandler {
    pub fn new(student_repo: Arc<dyn StudentRepositoryPort>) -> Self {
        Self { student_repo }
    }

    /// 校验后插入，返回新 id
    pub async fn handle(&self, command: CreateStudent) -> Result<i64, ApplicationError> {
        let profile = StudentProfile::new(command.name, command.email, command.age)?;

        let student_id = self
            .student_repo
            .create(profile.name(), profile.email(), profile.age())
            .await?;

        tracing::info!(
            student_id = student_id,
            name = %profile.name(),
            "Student created"
        );

        Ok(student_id)
    }
}

// ============================================================================
// UpdateStudent
// ============================================================================

/// UpdateStudent Handler
pub struct UpdateStudentHandler {
    student_repo: Arc<dyn StudentRepositoryPort>,
}

impl UpdateStudentHandler {
    pub fn new(student_repo: Arc<dyn StudentRepositoryPort>) -> Self {
        Self { student_repo }
    }

    pub async fn handle(&self, command: UpdateStudent) -> Result<StudentRecord, ApplicationError> {
        let profile = StudentProfile::new(command.name, command.email, command.age)?;

        let student = self
            .student_repo
            .update(
                command.student_id,
                profile.name(),
                profile.email(),
                profile.age(),
            )
            .await?;

        tracing::info!(student_id = student.id, "Student updated");

        Ok(student)
    }
}

// ============================================================================
// DeleteStudent
// ============================================================================

/// DeleteStudent Handler
///
/// 不检查学生是否存在，重复删除同样成功
pub struct DeleteStudentHandler {
    student_repo: Arc<dyn StudentRepositoryPort>,
}

impl DeleteStudentHandler {
    pub fn new(student_repo: Arc<dyn StudentRepositoryPort>) -> Self {
        Self { student_repo }
    }

    pub async fn handle(&self, command: DeleteStudent) -> Result<(), ApplicationError> {
        self.student_repo.delete(command.student_id).await?;

        tracing::info!(student_id = command.student_id, "Student deleted");

        Ok(())
    }
}

// ============================================================================
// DeleteAllStudents
// ============================================================================

/// DeleteAllStudents Handler
pub struct DeleteAllStudentsHandler {
    student_repo: Arc<dyn StudentRepositoryPort>,
}

impl DeleteAllStudentsHandler {
    pub fn new(student_repo: Arc<dyn StudentRepositoryPort>) -> Self {
        Self { student_repo }
    }

    pub async fn handle(&self, _command: DeleteAllStudents) -> Result<(), ApplicationError> {
        self.student_repo.delete_all().await?;

        tracing::info!("All students deleted");

        Ok(())
    }
}
