//! Domain & parameter models for starship operations

use crate::model::starship::{CreateStarshipDto, StarshipDto};

/// The starship domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Starship {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub hyperdrive_rating: String,
    pub mglt: String,
    pub starship_class: String,
    /// Names of the pilots, ordered by character id.
    pub pilots: Vec<String>,
}

impl Starship {
    pub fn from_entity(
        entity: entity::starship::Model,
        pilots: Vec<entity::character::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            manufacturer: entity.manufacturer,
            cost_in_credits: entity.cost_in_credits,
            length: entity.length,
            max_atmosphering_speed: entity.max_atmosphering_speed,
            crew: entity.crew,
            passengers: entity.passengers,
            cargo_capacity: entity.cargo_capacity,
            consumables: entity.consumables,
            hyperdrive_rating: entity.hyperdrive_rating,
            mglt: entity.mglt,
            starship_class: entity.starship_class,
            pilots: pilots.into_iter().map(|c| c.name).collect(),
        }
    }

    pub fn into_dto(self) -> StarshipDto {
        StarshipDto {
            id: self.id,
            name: self.name,
            model: self.model,
            manufacturer: self.manufacturer,
            cost_in_credits: self.cost_in_credits,
            length: self.length,
            max_atmosphering_speed: self.max_atmosphering_speed,
            crew: self.crew,
            passengers: self.passengers,
            cargo_capacity: self.cargo_capacity,
            consumables: self.consumables,
            hyperdrive_rating: self.hyperdrive_rating,
            mglt: self.mglt,
            starship_class: self.starship_class,
            pilots: self.pilots,
        }
    }
}

/// Parameters for creating a new starship
#[derive(Debug, Clone)]
pub struct CreateStarshipParam {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub hyperdrive_rating: String,
    pub mglt: String,
    pub starship_class: String,
}

impl CreateStarshipParam {
    pub fn from_dto(dto: CreateStarshipDto) -> Self {
        Self {
            name: dto.name,
            model: dto.model,
            manufacturer: dto.manufacturer,
            cost_in_credits: dto.cost_in_credits,
            length: dto.length,
            max_atmosphering_speed: dto.max_atmosphering_speed,
            crew: dto.crew,
            passengers: dto.passengers,
            cargo_capacity: dto.cargo_capacity,
            consumables: dto.consumables,
            hyperdrive_rating: dto.hyperdrive_rating,
            mglt: dto.mglt,
            starship_class: dto.starship_class,
        }
    }
}
