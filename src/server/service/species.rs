use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        character::CharacterRepository, planet::PlanetRepository, species::SpeciesRepository,
    },
    error::AppError,
    model::species::{CreateSpeciesParam, Species},
};

pub struct SpeciesService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeciesService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Species>, AppError> {
        SpeciesRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Species, AppError> {
        SpeciesRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Species {} not found", id)))
    }

    /// Creates a species on an existing homeworld
    ///
    /// # Returns
    /// - `Ok(Species)` - The created species
    /// - `Err(AppError::ConstraintViolation)` - The homeworld does not exist; nothing is stored
    pub async fn create(&self, param: CreateSpeciesParam) -> Result<Species, AppError> {
        if !PlanetRepository::new(self.db)
            .exists(param.homeworld_id)
            .await?
        {
            return Err(AppError::ConstraintViolation(format!(
                "Homeworld planet {} does not exist",
                param.homeworld_id
            )));
        }

        let species = SpeciesRepository::new(self.db).create(param).await?;

        tracing::info!("Created species {}", species.id);

        Ok(species)
    }

    /// Deletes a species
    ///
    /// # Returns
    /// - `Ok(())` - The species was deleted
    /// - `Err(AppError::NotFound)` - No species with that ID
    /// - `Err(AppError::ConstraintViolation)` - Characters still belong to the species
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if CharacterRepository::new(self.db)
            .exists_with_species(id)
            .await?
        {
            return Err(AppError::ConstraintViolation(format!(
                "Species {} still has characters",
                id
            )));
        }

        if !SpeciesRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Species {} not found", id)));
        }

        tracing::info!("Deleted species {}", id);

        Ok(())
    }
}
