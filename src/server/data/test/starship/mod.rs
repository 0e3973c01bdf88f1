use crate::server::{
    data::starship::StarshipRepository, error::AppError, model::starship::CreateStarshipParam,
};
use test_utils::{builder::TestBuilder, factory};

mod add_film;
mod add_pilot;
mod create;
mod delete;
