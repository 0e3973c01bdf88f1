use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{character::CharacterRepository, film::FilmRepository},
    error::AppError,
    model::film::{CreateFilmParam, Film},
};

pub struct FilmService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FilmService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Film>, AppError> {
        FilmRepository::new(self.db).get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Film, AppError> {
        FilmRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Film {} not found", id)))
    }

    pub async fn create(&self, param: CreateFilmParam) -> Result<Film, AppError> {
        let film = FilmRepository::new(self.db).create(param).await?;

        tracing::info!("Created film {}", film.id);

        Ok(film)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FilmRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Film {} not found", id)));
        }

        tracing::info!("Deleted film {}", id);

        Ok(())
    }

    /// Records that a character appears in a film
    ///
    /// # Returns
    /// - `Ok(())` - The association was created
    /// - `Err(AppError::NotFound)` - Film or character does not exist
    /// - `Err(AppError::ConstraintViolation)` - The character is already listed
    pub async fn add_character(&self, film_id: i32, character_id: i32) -> Result<(), AppError> {
        let film_repo = FilmRepository::new(self.db);

        if !film_repo.exists(film_id).await? {
            return Err(AppError::NotFound(format!("Film {} not found", film_id)));
        }

        if !CharacterRepository::new(self.db).exists(character_id).await? {
            return Err(AppError::NotFound(format!(
                "Character {} not found",
                character_id
            )));
        }

        film_repo.add_character(film_id, character_id).await?;

        tracing::info!("Added character {} to film {}", character_id, film_id);

        Ok(())
    }
}
