use crate::server::{
    data::enrollment::EnrollmentRepository,
    error::AppError,
    model::enrollment::{CreateEnrollmentParams, UpdateEnrollmentParams},
    service::enrollment::EnrollmentService,
};
use entity::enrollment::EnrollmentStatus;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod queries;
mod update_status;

/// Builds enrollment creation params.
fn enrollment_params(student_id: i32, course_id: i32, semester: &str) -> CreateEnrollmentParams {
    CreateEnrollmentParams {
        student_id,
        course_id,
        semester: semester.to_string(),
    }
}
