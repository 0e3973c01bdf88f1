//! Domain & parameter models for planet operations

use crate::model::planet::{CreatePlanetDto, PlanetDto};

/// The planet domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
}

impl Planet {
    pub fn from_entity(entity: entity::planet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            climate: entity.climate,
            terrain: entity.terrain,
            population: entity.population,
        }
    }

    pub fn into_dto(self) -> PlanetDto {
        PlanetDto {
            id: self.id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
            population: self.population,
        }
    }
}

/// Parameters for creating a new planet
#[derive(Debug, Clone)]
pub struct CreatePlanetParam {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub population: i64,
}

impl CreatePlanetParam {
    pub fn from_dto(dto: CreatePlanetDto) -> Self {
        Self {
            name: dto.name,
            climate: dto.climate,
            terrain: dto.terrain,
            population: dto.population,
        }
    }
}
