//! Command Handlers

mod student_handlers;

pub use student_handlers::{
    CreateStudentHandler, DeleteAllStudentsHandler, DeleteStudentHandler, UpdateStudentHandler,
};
