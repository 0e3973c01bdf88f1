use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, UnsafePlaintextPassword},
};
use entity::prelude::*;
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;

fn create_param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password: UnsafePlaintextPassword::new("hunter2"),
        is_active: true,
    }
}
