//! Planet data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::planet::{CreatePlanetParam, Planet},
};

/// Repository providing database operations for planets.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all planets ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Planet>, AppError> {
        let planets = entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await?;

        Ok(planets.into_iter().map(Planet::from_entity).collect())
    }

    /// Finds a planet by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, AppError> {
        let planet = entity::prelude::Planet::find_by_id(id).one(self.db).await?;

        Ok(planet.map(Planet::from_entity))
    }

    /// Checks whether a planet with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Planet::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new planet
    pub async fn create(&self, param: CreatePlanetParam) -> Result<Planet, AppError> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(param.name),
            climate: ActiveValue::Set(param.climate),
            terrain: ActiveValue::Set(param.terrain),
            population: ActiveValue::Set(param.population),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Planet::from_entity(planet))
    }

    /// Deletes a planet
    ///
    /// # Returns
    /// - `Ok(true)` - The planet was deleted
    /// - `Ok(false)` - No planet with that ID existed
    /// - `Err(AppError::ConstraintViolation)` - Characters or species still reference the planet
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Planet::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
