//! Server-side domain models and operation parameter types.
//!
//! Each module pairs a domain model (converted from the SeaORM entity at the
//! repository boundary, converted to a DTO at the controller boundary) with
//! the parameter structs for create/update operations. The parameter structs
//! double as the per-entity whitelist of patchable fields: anything without a
//! field here cannot be changed through the API.

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod student;
pub mod user;
