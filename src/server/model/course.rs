//! Course domain model and parameters.

use crate::model::course::CourseDto;

/// Course owned by an instructor, with a bounded enrollment capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub title: String,
    /// Unique course code (e.g. "CS101").
    pub course_code: String,
    pub description: String,
    pub credit_hours: i32,
    /// Maximum number of simultaneously enrolled students. Always positive.
    pub max_capacity: i32,
    pub instructor_id: i32,
}

impl Course {
    /// Converts the course domain model to a DTO for API responses.
    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            course_code: self.course_code,
            description: self.description,
            credit_hours: self.credit_hours,
            max_capacity: self.max_capacity,
            instructor_id: self.instructor_id,
        }
    }

    /// Converts an entity model to a course domain model at the repository boundary.
    pub fn from_entity(entity: entity::course::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            course_code: entity.course_code,
            description: entity.description,
            credit_hours: entity.credit_hours,
            max_capacity: entity.max_capacity,
            instructor_id: entity.instructor_id,
        }
    }
}

/// Parameters for creating a course.
#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub title: String,
    pub course_code: String,
    pub description: String,
    pub credit_hours: i32,
    pub max_capacity: i32,
    pub instructor_id: i32,
}

/// Parameters for patching a course.
///
/// `None` fields are left untouched. Ownership (`instructor_id`) is
/// deliberately not representable here.
#[derive(Debug, Clone)]
pub struct UpdateCourseParams {
    pub id: i32,
    pub title: Option<String>,
    pub course_code: Option<String>,
    pub description: Option<String>,
    pub credit_hours: Option<i32>,
    pub max_capacity: Option<i32>,
}
