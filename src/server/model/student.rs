//! Student profile domain model and parameters.

use crate::model::student::StudentDto;

/// Student profile linked one-to-one to an account.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: i32,
    /// External student code, unique across the system.
    pub student_code: String,
    pub enrollment_year: i32,
    /// Id of the backing account.
    pub user_id: i32,
}

impl Student {
    /// Converts the student domain model to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            age: self.age,
            student_code: self.student_code,
            enrollment_year: self.enrollment_year,
            user_id: self.user_id,
        }
    }

    /// Converts an entity model to a student domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            student_code: entity.student_code,
            enrollment_year: entity.enrollment_year,
            user_id: entity.user_id,
        }
    }
}

/// Parameters for creating a student together with its backing account.
///
/// The account (role `student`) and the profile are inserted in one
/// transaction; a failure on either side rolls back both.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub username: String,
    pub email: String,
    /// Already-hashed initial password.
    pub password_hash: String,
    pub name: String,
    pub age: i32,
    pub student_code: String,
    pub enrollment_year: i32,
}

/// Parameters for patching a student profile.
///
/// `None` fields are left untouched. The account link is deliberately not
/// representable here.
#[derive(Debug, Clone)]
pub struct UpdateStudentParams {
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub student_code: Option<String>,
    pub enrollment_year: Option<i32>,
}
