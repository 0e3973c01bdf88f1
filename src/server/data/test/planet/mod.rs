use crate::server::{data::planet::PlanetRepository, error::AppError, model::planet::CreatePlanetParam};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;
