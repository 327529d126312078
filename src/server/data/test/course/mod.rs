use crate::server::{
    data::course::CourseRepository,
    error::AppError,
    model::course::{CreateCourseParams, UpdateCourseParams},
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update;

/// Builds course creation params for an existing instructor.
fn course_params(course_code: &str, instructor_id: i32) -> CreateCourseParams {
    CreateCourseParams {
        title: format!("Course {}", course_code),
        course_code: course_code.to_string(),
        description: "A course".to_string(),
        credit_hours: 3,
        max_capacity: 30,
        instructor_id,
    }
}
