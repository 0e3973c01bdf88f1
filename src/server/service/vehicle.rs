use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, film::FilmRepository, vehicle::VehicleRepository},
    error::AppError,
    model::vehicle::{CreateVehicleParam, Vehicle},
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Vehicle>, AppError> {
        VehicleRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        VehicleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    pub async fn create(&self, param: CreateVehicleParam) -> Result<Vehicle, AppError> {
        let vehicle = VehicleRepository::new(self.db).create(param).await?;

        tracing::info!("Created vehicle {}", vehicle.id);

        Ok(vehicle)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !VehicleRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Vehicle {} not found", id)));
        }

        tracing::info!("Deleted vehicle {}", id);

        Ok(())
    }

    /// Records that a character pilots a vehicle
    pub async fn add_pilot(&self, vehicle_id: i32, character_id: i32) -> Result<(), AppError> {
        let repo = VehicleRepository::new(self.db);

        if !repo.exists(vehicle_id).await? {
            return Err(AppError::NotFound(format!("Vehicle {} not found", vehicle_id)));
        }

        if !CharacterRepository::new(self.db).exists(character_id).await? {
            return Err(AppError::NotFound(format!(
                "Character {} not found",
                character_id
            )));
        }

        repo.add_pilot(vehicle_id, character_id).await?;

        tracing::info!("Added pilot {} to vehicle {}", character_id, vehicle_id);

        Ok(())
    }

    /// Records that a vehicle appears in a film
    pub async fn add_film(&self, vehicle_id: i32, film_id: i32) -> Result<(), AppError> {
        let repo = VehicleRepository::new(self.db);

        if !repo.exists(vehicle_id).await? {
            return Err(AppError::NotFound(format!("Vehicle {} not found", vehicle_id)));
        }

        if !FilmRepository::new(self.db).exists(film_id).await? {
            return Err(AppError::NotFound(format!("Film {} not found", film_id)));
        }

        repo.add_film(vehicle_id, film_id).await?;

        tracing::info!("Added film {} to vehicle {}", film_id, vehicle_id);

        Ok(())
    }
}
