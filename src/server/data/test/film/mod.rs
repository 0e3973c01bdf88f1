use crate::server::{data::film::FilmRepository, error::AppError, model::film::CreateFilmParam};
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

mod add_character;
mod create;
mod delete;
mod get_all;
