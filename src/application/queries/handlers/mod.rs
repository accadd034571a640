//! Query Handlers

mod student_handlers;

pub use student_handlers::{GetStudentHandler, ListStudentsHandler};
