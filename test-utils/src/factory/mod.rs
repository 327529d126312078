//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let student = factory::student::create_student(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (student, course, enrollment) =
//!         factory::helpers::create_enrollment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .username("grace")
//!     .role(entity::user::Role::Admin)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create account entities
//! - `student` - Create student profile entities
//! - `instructor` - Create instructor profile entities
//! - `course` - Create course entities
//! - `enrollment` - Create enrollment entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod course;
pub mod enrollment;
pub mod helpers;
pub mod instructor;
pub mod student;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use course::create_course;
pub use enrollment::create_enrollment;
pub use instructor::create_instructor;
pub use student::create_student;
pub use user::{create_user, create_user_with_role};
