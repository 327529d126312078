//! Request and response DTOs shared by all API endpoints.
//!
//! These types define the JSON wire format of the API. They carry no behavior
//! beyond serialization; conversion to and from domain models happens in the
//! server's model layer.

pub mod api;
pub mod auth;
pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod student;
pub mod user;
