//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Credentials**: Password hashing and bearer-token issue/validation (`auth`)

pub mod auth;
pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod student;
pub mod user;
