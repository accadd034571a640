//! In-Memory Student Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::application::ports::{RepositoryError, StudentRecord, StudentRepositoryPort};

/// 内存学生仓储
///
/// 与 SQLite 实现遵守同一契约：id 自增且不复用，列表按 id 升序
pub struct InMemoryStudentRepository {
    students: DashMap<i64, StudentRecord>,
    next_id: AtomicI64,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            students: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepositoryPort for InMemoryStudentRepository {
    async fn create(&self, name: &str, email: &str, age: i64) -> Result<i64, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.students.insert(
            id,
            StudentRecord {
                id,
                name: name.to_string(),
                email: email.to_string(),
                age,
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<StudentRecord, RepositoryError> {
        self.students
            .get(&id)
            .map(|s| s.clone())
            .ok_or_else(|| RepositoryError::student_not_found(id))
    }

    async fn find_all(&self) -> Result<Vec<StudentRecord>, RepositoryError> {
        let mut students: Vec<StudentRecord> =
            self.students.iter().map(|entry| entry.value().clone()).collect();
        students.sort_by_key(|s| s.id);
        Ok(students)
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<StudentRecord, RepositoryError> {
        let mut student = self
            .students
            .get_mut(&id)
            .ok_or_else(RepositoryError::no_rows_affected)?;
        student.name = name.to_string();
        student.email = email.to_string();
        student.age = age;
        Ok(student.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.students.remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.students.clear();
        Ok(())
    }
}
