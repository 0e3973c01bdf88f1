use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, planet::PlanetRepository, species::SpeciesRepository},
    error::AppError,
    model::character::{Character, CreateCharacterParam},
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        CharacterRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Character, AppError> {
        CharacterRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Character {} not found", id)))
    }

    /// Creates a character belonging to an existing species and homeworld
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character with its homeworld name resolved
    /// - `Err(AppError::ConstraintViolation)` - Species or homeworld does not exist
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, AppError> {
        if !SpeciesRepository::new(self.db)
            .exists(param.species_id)
            .await?
        {
            return Err(AppError::ConstraintViolation(format!(
                "Species {} does not exist",
                param.species_id
            )));
        }

        if !PlanetRepository::new(self.db)
            .exists(param.homeworld_id)
            .await?
        {
            return Err(AppError::ConstraintViolation(format!(
                "Homeworld planet {} does not exist",
                param.homeworld_id
            )));
        }

        let character = CharacterRepository::new(self.db).create(param).await?;

        tracing::info!("Created character {}", character.id);

        Ok(character)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CharacterRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Character {} not found", id)));
        }

        tracing::info!("Deleted character {}", id);

        Ok(())
    }
}
