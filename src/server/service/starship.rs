use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, film::FilmRepository, starship::StarshipRepository},
    error::AppError,
    model::starship::{CreateStarshipParam, Starship},
};

pub struct StarshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StarshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Starship>, AppError> {
        StarshipRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Starship, AppError> {
        StarshipRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Starship {} not found", id)))
    }

    pub async fn create(&self, param: CreateStarshipParam) -> Result<Starship, AppError> {
        let starship = StarshipRepository::new(self.db).create(param).await?;

        tracing::info!("Created starship {}", starship.id);

        Ok(starship)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !StarshipRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Starship {} not found", id)));
        }

        tracing::info!("Deleted starship {}", id);

        Ok(())
    }

    /// Records that a character pilots a starship
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Starship or character does not exist
    /// - `Err(AppError::ConstraintViolation)` - The character already pilots it
    pub async fn add_pilot(&self, starship_id: i32, character_id: i32) -> Result<(), AppError> {
        let repo = StarshipRepository::new(self.db);

        self.ensure_exists(&repo, starship_id).await?;

        if !CharacterRepository::new(self.db).exists(character_id).await? {
            return Err(AppError::NotFound(format!(
                "Character {} not found",
                character_id
            )));
        }

        repo.add_pilot(starship_id, character_id).await?;

        tracing::info!("Added pilot {} to starship {}", character_id, starship_id);

        Ok(())
    }

    /// Records that a starship appears in a film
    pub async fn add_film(&self, starship_id: i32, film_id: i32) -> Result<(), AppError> {
        let repo = StarshipRepository::new(self.db);

        self.ensure_exists(&repo, starship_id).await?;

        if !FilmRepository::new(self.db).exists(film_id).await? {
            return Err(AppError::NotFound(format!("Film {} not found", film_id)));
        }

        repo.add_film(starship_id, film_id).await?;

        tracing::info!("Added film {} to starship {}", film_id, starship_id);

        Ok(())
    }

    async fn ensure_exists(
        &self,
        repo: &StarshipRepository<'_, DatabaseConnection>,
        id: i32,
    ) -> Result<(), AppError> {
        if !repo.exists(id).await? {
            return Err(AppError::NotFound(format!("Starship {} not found", id)));
        }

        Ok(())
    }
}
