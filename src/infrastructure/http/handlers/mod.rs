//! HTTP Handlers

mod ping;
mod student;

pub use ping::*;
pub use student::*;
