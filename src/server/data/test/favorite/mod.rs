use crate::server::{
    data::favorite::FavoriteRepository, error::AppError, model::favorite::FavoriteItem,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_one;
mod get_by_user;
