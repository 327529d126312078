use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{CreateStudentParams, UpdateStudentParams},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

/// Builds student creation params with derived account fields.
fn student_params(username: &str, student_code: &str) -> CreateStudentParams {
    CreateStudentParams {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "hash".to_string(),
        name: format!("Student {}", username),
        age: 20,
        student_code: student_code.to_string(),
        enrollment_year: 2026,
    }
}
