//! Vehicle data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::vehicle::{CreateVehicleParam, Vehicle},
};

/// Repository providing database operations for vehicles.
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all vehicles ordered by ID with their pilots resolved
    pub async fn get_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            result.push(self.resolve(vehicle).await?);
        }

        Ok(result)
    }

    /// Finds a vehicle by ID with its pilots resolved
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let Some(vehicle) = entity::prelude::Vehicle::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.resolve(vehicle).await?))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Vehicle::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new vehicle with no pilots
    pub async fn create(&self, param: CreateVehicleParam) -> Result<Vehicle, AppError> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(param.name),
            model: ActiveValue::Set(param.model),
            manufacturer: ActiveValue::Set(param.manufacturer),
            length: ActiveValue::Set(param.length),
            max_atmosphering_speed: ActiveValue::Set(param.max_atmosphering_speed),
            crew: ActiveValue::Set(param.crew),
            passengers: ActiveValue::Set(param.passengers),
            cargo_capacity: ActiveValue::Set(param.cargo_capacity),
            consumables: ActiveValue::Set(param.consumables),
            vehicle_class: ActiveValue::Set(param.vehicle_class),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vehicle::from_entity(vehicle, Vec::new()))
    }

    /// Deletes a vehicle, cascading to its pilot and film associations
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records that a character pilots the vehicle
    pub async fn add_pilot(&self, vehicle_id: i32, character_id: i32) -> Result<(), AppError> {
        entity::character_vehicle::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Records that the vehicle appears in a film
    pub async fn add_film(&self, vehicle_id: i32, film_id: i32) -> Result<(), AppError> {
        entity::vehicle_film::ActiveModel {
            vehicle_id: ActiveValue::Set(vehicle_id),
            film_id: ActiveValue::Set(film_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    async fn resolve(&self, vehicle: entity::vehicle::Model) -> Result<Vehicle, AppError> {
        let pilots = vehicle
            .find_related(entity::prelude::Character)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(Vehicle::from_entity(vehicle, pilots))
    }
}
