use crate::server::{
    data::instructor::InstructorRepository, error::AppError,
    model::instructor::CreateInstructorParams,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;

/// Builds instructor creation params with derived account fields.
fn instructor_params(username: &str) -> CreateInstructorParams {
    CreateInstructorParams {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "hash".to_string(),
        name: format!("Instructor {}", username),
        specialty: "Mathematics".to_string(),
    }
}
