//! Domain & parameter models for species operations

use crate::{
    model::species::{Classification, CreateSpeciesDto, Designation, SpeciesDto},
    server::{error::AppError, util::parse::parse_stored_enum},
};

/// The species domain model
///
/// Keeps its homeworld as an id; the API exposes the id rather than the planet name.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: i32,
    pub name: String,
    pub classification: Classification,
    pub designation: Designation,
    pub average_height: f64,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan_in_years: String,
    pub language: String,
    pub homeworld_id: i32,
}

impl Species {
    /// Converts an entity model to the species domain model
    ///
    /// # Returns
    /// - `Ok(Species)` - The converted species domain model
    /// - `Err(AppError::InternalErr(ParseStoredEnum))` - Stored classification or
    ///   designation is not a known variant
    pub fn from_entity(entity: entity::species::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            classification: parse_stored_enum("species.classification", entity.classification)?,
            designation: parse_stored_enum("species.designation", entity.designation)?,
            average_height: entity.average_height,
            skin_colors: entity.skin_colors,
            hair_colors: entity.hair_colors,
            eye_colors: entity.eye_colors,
            average_lifespan_in_years: entity.average_lifespan_in_years,
            language: entity.language,
            homeworld_id: entity.homeworld_id,
        })
    }

    pub fn into_dto(self) -> SpeciesDto {
        SpeciesDto {
            id: self.id,
            name: self.name,
            classification: self.classification,
            designation: self.designation,
            average_height: self.average_height,
            skin_colors: self.skin_colors,
            hair_colors: self.hair_colors,
            eye_colors: self.eye_colors,
            average_lifespan_in_years: self.average_lifespan_in_years,
            language: self.language,
            homeworld_id: self.homeworld_id,
        }
    }
}

/// Parameters for creating a new species
#[derive(Debug, Clone)]
pub struct CreateSpeciesParam {
    pub name: String,
    pub classification: Classification,
    pub designation: Designation,
    pub average_height: f64,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan_in_years: String,
    pub language: String,
    pub homeworld_id: i32,
}

impl CreateSpeciesParam {
    pub fn from_dto(dto: CreateSpeciesDto) -> Self {
        Self {
            name: dto.name,
            classification: dto.classification,
            designation: dto.designation,
            average_height: dto.average_height,
            skin_colors: dto.skin_colors,
            hair_colors: dto.hair_colors,
            eye_colors: dto.eye_colors,
            average_lifespan_in_years: dto.average_lifespan_in_years,
            language: dto.language,
            homeworld_id: dto.homeworld_id,
        }
    }
}
