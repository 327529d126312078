use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateAccountParams, UpdateAccountParams},
};
use entity::user::Role;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get;
mod update;

/// Builds account creation params with a derived email and placeholder hash.
fn account_params(username: &str, role: Role) -> CreateAccountParams {
    CreateAccountParams {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "hash".to_string(),
        role,
    }
}
