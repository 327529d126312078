//! Repository tests against in-memory SQLite.
//!
//! Organized one module per entity, one file per operation, using the
//! `test-utils` builder and factories for setup.

mod course;
mod enrollment;
mod instructor;
mod student;
mod user;
