use crate::{
    model::species::{Classification, Designation},
    server::{data::species::SpeciesRepository, error::AppError, model::species::CreateSpeciesParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_all;

fn create_param(homeworld_id: i32) -> CreateSpeciesParam {
    CreateSpeciesParam {
        name: "Wookiee".to_string(),
        classification: Classification::Mammal,
        designation: Designation::Sentient,
        average_height: 2.1,
        skin_colors: "gray".to_string(),
        hair_colors: "black, brown".to_string(),
        eye_colors: "blue, green, yellow, brown".to_string(),
        average_lifespan_in_years: "400".to_string(),
        language: "Shyriiwook".to_string(),
        homeworld_id,
    }
}
