//! Film data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::film::{CreateFilmParam, Film},
};

/// Repository providing database operations for films.
pub struct FilmRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FilmRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all films ordered by ID with their characters resolved
    pub async fn get_all(&self) -> Result<Vec<Film>, AppError> {
        let films = entity::prelude::Film::find()
            .order_by_asc(entity::film::Column::Id)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(films.len());
        for film in films {
            result.push(self.resolve(film).await?);
        }

        Ok(result)
    }

    /// Finds a film by ID with its characters resolved
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Film>, AppError> {
        let Some(film) = entity::prelude::Film::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.resolve(film).await?))
    }

    /// Checks whether a film with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Film::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Creates a new film with no characters
    pub async fn create(&self, param: CreateFilmParam) -> Result<Film, AppError> {
        let film = entity::film::ActiveModel {
            title: ActiveValue::Set(param.title),
            episode_id: ActiveValue::Set(param.episode_id),
            director: ActiveValue::Set(param.director),
            producer: ActiveValue::Set(param.producer),
            release_date: ActiveValue::Set(param.release_date),
            opening_crawl: ActiveValue::Set(param.opening_crawl),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Film::from_entity(film, Vec::new()))
    }

    /// Deletes a film, cascading to every association referencing it
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Film::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Records that a character appears in the film
    pub async fn add_character(&self, film_id: i32, character_id: i32) -> Result<(), AppError> {
        entity::character_film::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            film_id: ActiveValue::Set(film_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    async fn resolve(&self, film: entity::film::Model) -> Result<Film, AppError> {
        let characters = film
            .find_related(entity::prelude::Character)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(Film::from_entity(film, characters))
    }
}
