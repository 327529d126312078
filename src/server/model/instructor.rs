//! Instructor profile domain model and parameters.

use crate::model::instructor::InstructorDto;

/// Instructor profile linked one-to-one to an account.
#[derive(Debug, Clone, PartialEq)]
pub struct Instructor {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    /// Id of the backing account.
    pub user_id: i32,
}

impl Instructor {
    /// Converts the instructor domain model to a DTO for API responses.
    pub fn into_dto(self) -> InstructorDto {
        InstructorDto {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
            user_id: self.user_id,
        }
    }

    /// Converts an entity model to an instructor domain model at the repository boundary.
    pub fn from_entity(entity: entity::instructor::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            specialty: entity.specialty,
            user_id: entity.user_id,
        }
    }
}

/// Parameters for creating an instructor together with its backing account.
#[derive(Debug, Clone)]
pub struct CreateInstructorParams {
    pub username: String,
    pub email: String,
    /// Already-hashed initial password.
    pub password_hash: String,
    pub name: String,
    pub specialty: String,
}

/// Parameters for patching an instructor profile.
#[derive(Debug, Clone)]
pub struct UpdateInstructorParams {
    pub id: i32,
    pub name: Option<String>,
    pub specialty: Option<String>,
}
