//! Starship data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, ModelTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::starship::{CreateStarshipParam, Starship},
};

/// Repository providing database operations for starships.
pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all starships ordered by ID with their pilots resolved
    pub async fn get_all(&self) -> Result<Vec<Starship>, AppError> {
        let starships = entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(starships.len());
        for starship in starships {
            result.push(self.resolve(starship).await?);
        }

        Ok(result)
    }

    /// Finds a starship by ID with its pilots resolved
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Starship>, AppError> {
        let Some(starship) = entity::prelude::Starship::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.resolve(starship).await?))
    }

    /// Checks whether a starship with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Starship::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new starship with no pilots
    pub async fn create(&self, param: CreateStarshipParam) -> Result<Starship, AppError> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(param.name),
            model: ActiveValue::Set(param.model),
            manufacturer: ActiveValue::Set(param.manufacturer),
            cost_in_credits: ActiveValue::Set(param.cost_in_credits),
            length: ActiveValue::Set(param.length),
            max_atmosphering_speed: ActiveValue::Set(param.max_atmosphering_speed),
            crew: ActiveValue::Set(param.crew),
            passengers: ActiveValue::Set(param.passengers),
            cargo_capacity: ActiveValue::Set(param.cargo_capacity),
            consumables: ActiveValue::Set(param.consumables),
            hyperdrive_rating: ActiveValue::Set(param.hyperdrive_rating),
            mglt: ActiveValue::Set(param.mglt),
            starship_class: ActiveValue::Set(param.starship_class),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Starship::from_entity(starship, Vec::new()))
    }

    /// Deletes a starship, cascading to its pilot and film associations
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Starship::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records that a character pilots the starship
    pub async fn add_pilot(&self, starship_id: i32, character_id: i32) -> Result<(), AppError> {
        entity::character_starship::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            starship_id: ActiveValue::Set(starship_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Records that the starship appears in a film
    pub async fn add_film(&self, starship_id: i32, film_id: i32) -> Result<(), AppError> {
        entity::starship_film::ActiveModel {
            starship_id: ActiveValue::Set(starship_id),
            film_id: ActiveValue::Set(film_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    async fn resolve(&self, starship: entity::starship::Model) -> Result<Starship, AppError> {
        let pilots = starship
            .find_related(entity::prelude::Character)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(Starship::from_entity(starship, pilots))
    }
}
