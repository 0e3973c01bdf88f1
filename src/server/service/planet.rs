use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, planet::PlanetRepository, species::SpeciesRepository,
    },
    error::AppError,
    model::planet::{CreatePlanetParam, Planet},
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        PlanetRepository::new(self.db).get_all().await
    }

    /// Gets a planet by ID, `NotFound` when missing
    pub async fn get_by_id(&self, id: i32) -> Result<Planet, AppError> {
        PlanetRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Planet {} not found", id)))
    }

    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, AppError> {
        let planet = PlanetRepository::new(self.db).create(param).await?;

        tracing::info!("Created planet {}", planet.id);

        Ok(planet)
    }

    /// Deletes a planet
    ///
    /// # Returns
    /// - `Ok(())` - The planet was deleted
    /// - `Err(AppError::NotFound)` - No planet with that ID
    /// - `Err(AppError::ConstraintViolation)` - Characters or species still live there
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if SpeciesRepository::new(self.db)
            .exists_with_homeworld(id)
            .await?
            || CharacterRepository::new(self.db)
                .exists_with_homeworld(id)
                .await?
        {
            return Err(AppError::ConstraintViolation(format!(
                "Planet {} is still the homeworld of species or characters",
                id
            )));
        }

        if !PlanetRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Planet {} not found", id)));
        }

        tracing::info!("Deleted planet {}", id);

        Ok(())
    }
}
