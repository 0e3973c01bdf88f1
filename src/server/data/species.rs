//! Species data repository for database operations

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::species::{CreateSpeciesParam, Species},
};

/// Repository providing database operations for species.
pub struct SpeciesRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpeciesRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all species ordered by ID
    ///
    /// # Returns
    /// - `Ok(Vec<Species>)` - Every species, possibly empty
    /// - `Err(AppError::InternalErr)` - A stored classification or designation is corrupted
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Species>, AppError> {
        let species = entity::prelude::Species::find()
            .order_by_asc(entity::species::Column::Id)
            .all(self.db)
            .await?;

        species.into_iter().map(Species::from_entity).collect()
    }

    /// Finds a species by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Species>, AppError> {
        entity::prelude::Species::find_by_id(id)
            .one(self.db)
            .await?
            .map(Species::from_entity)
            .transpose()
    }

    /// Checks whether a species with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Species::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any species has the given planet as its homeworld
    pub async fn exists_with_homeworld(&self, planet_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Species::find()
            .filter(entity::species::Column::HomeworldId.eq(planet_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new species, storing enumerated fields as their string values
    ///
    /// # Returns
    /// - `Ok(Species)` - The created species
    /// - `Err(AppError::ConstraintViolation)` - Homeworld does not exist
    pub async fn create(&self, param: CreateSpeciesParam) -> Result<Species, AppError> {
        let species = entity::species::ActiveModel {
            name: ActiveValue::Set(param.name),
            classification: ActiveValue::Set(param.classification.as_str().to_string()),
            designation: ActiveValue::Set(param.designation.as_str().to_string()),
            average_height: ActiveValue::Set(param.average_height),
            skin_colors: ActiveValue::Set(param.skin_colors),
            hair_colors: ActiveValue::Set(param.hair_colors),
            eye_colors: ActiveValue::Set(param.eye_colors),
            average_lifespan_in_years: ActiveValue::Set(param.average_lifespan_in_years),
            language: ActiveValue::Set(param.language),
            homeworld_id: ActiveValue::Set(param.homeworld_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Species::from_entity(species)
    }

    /// Deletes a species
    ///
    /// # Returns
    /// - `Ok(true)` - The species was deleted
    /// - `Ok(false)` - No species with that ID existed
    /// - `Err(AppError::ConstraintViolation)` - Characters still belong to the species
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Species::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
