use crate::{
    model::character::Gender,
    server::{
        data::character::CharacterRepository, error::AppError,
        model::character::CreateCharacterParam,
    },
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;

fn create_param(species_id: i32, homeworld_id: i32) -> CreateCharacterParam {
    CreateCharacterParam {
        name: "Luke Skywalker".to_string(),
        gender: Gender::Masculine,
        species_id,
        weight: 77.0,
        hair_color: "blond".to_string(),
        eye_color: "blue".to_string(),
        birth_year: "19BBY".to_string(),
        homeworld_id,
    }
}
