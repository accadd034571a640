//! SQLite Student Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, StudentRecord, StudentRepositoryPort};

/// SQLite Student Repository
pub struct SqliteStudentRepository {
    pool: DbPool,
}

impl SqliteStudentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    email: String,
    age: i64,
}

impl From<StudentRow> for StudentRecord {
    fn from(row: StudentRow) -> Self {
        StudentRecord {
            id: row.id,
            name: row.name,
            email: row.email,
            age: row.age,
        }
    }
}

fn db_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl StudentRepositoryPort for SqliteStudentRepository {
    async fn create(&self, name: &str, email: &str, age: i64) -> Result<i64, RepositoryError> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(age)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<StudentRecord, RepositoryError> {
        let row: Option<StudentRow> =
            sqlx::query_as("SELECT id, name, email, age FROM students WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_error)?;

        row.map(StudentRecord::from)
            .ok_or_else(|| RepositoryError::student_not_found(id))
    }

    async fn find_all(&self) -> Result<Vec<StudentRecord>, RepositoryError> {
        let rows: Vec<StudentRow> = sqlx::query_as("SELECT id, name, email, age FROM students")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(rows.into_iter().map(StudentRecord::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        email: &str,
        age: i64,
    ) -> Result<StudentRecord, RepositoryError> {
        let result = sqlx::query("UPDATE students SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(name)
            .bind(email)
            .bind(age)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::no_rows_affected());
        }

        Ok(StudentRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
            age,
        })
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM students")
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
