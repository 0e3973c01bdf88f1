//! Domain & parameter models for vehicle operations

use crate::model::vehicle::{CreateVehicleDto, VehicleDto};

/// The vehicle domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub vehicle_class: String,
    pub pilots: Vec<String>,
}

impl Vehicle {
    pub fn from_entity(
        entity: entity::vehicle::Model,
        pilots: Vec<entity::character::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            model: entity.model,
            manufacturer: entity.manufacturer,
            length: entity.length,
            max_atmosphering_speed: entity.max_atmosphering_speed,
            crew: entity.crew,
            passengers: entity.passengers,
            cargo_capacity: entity.cargo_capacity,
            consumables: entity.consumables,
            vehicle_class: entity.vehicle_class,
            pilots: pilots.into_iter().map(|c| c.name).collect(),
        }
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            name: self.name,
            model: self.model,
            manufacturer: self.manufacturer,
            length: self.length,
            max_atmosphering_speed: self.max_atmosphering_speed,
            crew: self.crew,
            passengers: self.passengers,
            cargo_capacity: self.cargo_capacity,
            consumables: self.consumables,
            vehicle_class: self.vehicle_class,
            pilots: self.pilots,
        }
    }
}

/// Parameters for creating a new vehicle
#[derive(Debug, Clone)]
pub struct CreateVehicleParam {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub vehicle_class: String,
}

impl CreateVehicleParam {
    pub fn from_dto(dto: CreateVehicleDto) -> Self {
        Self {
            name: dto.name,
            model: dto.model,
            manufacturer: dto.manufacturer,
            length: dto.length,
            max_atmosphering_speed: dto.max_atmosphering_speed,
            crew: dto.crew,
            passengers: dto.passengers,
            cargo_capacity: dto.cargo_capacity,
            consumables: dto.consumables,
            vehicle_class: dto.vehicle_class,
        }
    }
}
