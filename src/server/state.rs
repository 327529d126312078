//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::model::auth::TokenKeys;

/// Application state containing shared resources and dependencies.
///
/// Initialized once during server startup and cloned (cheaply) for each
/// incoming request via Axum's state extraction:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenKeys` holds the signing/verification keys and token lifetime
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Bearer-token key material and lifetime, built from configuration.
    pub tokens: TokenKeys,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token key material from configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenKeys) -> Self {
        Self { db, tokens }
    }
}
