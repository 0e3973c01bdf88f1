//! Domain & parameter models for character operations
//!
//! A character is rendered with its homeworld's name and the titles of its films,
//! so the domain model carries those resolved values alongside the raw foreign keys.

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, Gender},
    server::{error::AppError, util::parse::parse_stored_enum},
};

/// The character domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub weight: f64,
    pub hair_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub species_id: i32,
    pub homeworld_id: i32,
    /// Name of the homeworld, `None` when the planet row could not be resolved.
    pub homeworld: Option<String>,
    /// Titles of the films the character appears in, ordered by film id.
    pub films: Vec<String>,
}

impl Character {
    /// Converts an entity model and its resolved relations to the character domain model
    ///
    /// # Arguments
    /// - `entity` - The character entity model
    /// - `homeworld` - The homeworld planet, if it could be found
    /// - `films` - Films the character appears in, already ordered
    ///
    /// # Returns
    /// - `Ok(Character)` - The converted character domain model
    /// - `Err(AppError::InternalErr(ParseStoredEnum))` - Stored gender is not a known variant
    pub fn from_entity(
        entity: entity::character::Model,
        homeworld: Option<entity::planet::Model>,
        films: Vec<entity::film::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            gender: parse_stored_enum("character.gender", entity.gender)?,
            weight: entity.weight,
            hair_color: entity.hair_color,
            eye_color: entity.eye_color,
            birth_year: entity.birth_year,
            species_id: entity.species_id,
            homeworld_id: entity.homeworld_id,
            homeworld: homeworld.map(|planet| planet.name),
            films: films.into_iter().map(|film| film.title).collect(),
        })
    }

    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            gender: self.gender,
            weight: self.weight,
            hair_color: self.hair_color,
            eye_color: self.eye_color,
            birth_year: self.birth_year,
            homeworld: self.homeworld,
            films: self.films,
        }
    }
}

/// Parameters for creating a new character
#[derive(Debug, Clone)]
pub struct CreateCharacterParam {
    pub name: String,
    pub gender: Gender,
    pub species_id: i32,
    pub weight: f64,
    pub hair_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub homeworld_id: i32,
}

impl CreateCharacterParam {
    pub fn from_dto(dto: CreateCharacterDto) -> Self {
        Self {
            name: dto.name,
            gender: dto.gender,
            species_id: dto.species_id,
            weight: dto.weight,
            hair_color: dto.hair_color,
            eye_color: dto.eye_color,
            birth_year: dto.birth_year,
            homeworld_id: dto.homeworld_id,
        }
    }
}
