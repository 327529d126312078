//! Request processing middleware: authentication and authorization guards.

pub mod auth;
