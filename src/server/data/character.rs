//! Character data repository for database operations
//!
//! Characters are returned with their homeworld and film relations resolved. Listing
//! loads the relations for every character in one query per relation.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    error::AppError,
    model::character::{Character, CreateCharacterParam},
};

/// Repository providing database operations for characters.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new CharacterRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `CharacterRepository` - new repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all characters ordered by ID with their relations resolved
    ///
    /// # Returns
    /// - `Ok(Vec<Character>)` - Every character, possibly empty
    /// - `Err(AppError::InternalErr)` - A stored gender is corrupted
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Character>, AppError> {
        let characters = entity::prelude::Character::find()
            .find_also_related(entity::prelude::Planet)
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        // Fetch the films of every listed character in one query
        let character_ids: Vec<i32> = characters.iter().map(|(c, _)| c.id).collect();
        let mut films_map: HashMap<i32, Vec<entity::film::Model>> = HashMap::new();
        if !character_ids.is_empty() {
            let appearances = entity::prelude::CharacterFilm::find()
                .filter(entity::character_film::Column::CharacterId.is_in(character_ids))
                .find_also_related(entity::prelude::Film)
                .order_by_asc(entity::character_film::Column::FilmId)
                .all(self.db)
                .await?;

            for (appearance, film) in appearances {
                if let Some(film) = film {
                    films_map
                        .entry(appearance.character_id)
                        .or_default()
                        .push(film);
                }
            }
        }

        characters
            .into_iter()
            .map(|(character, homeworld)| {
                let films = films_map.remove(&character.id).unwrap_or_default();
                Character::from_entity(character, homeworld, films)
            })
            .collect()
    }

    /// Finds a character by ID with its relations resolved
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The character if found
    /// - `Ok(None)` - No character with that ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Character>, AppError> {
        let Some(character) = entity::prelude::Character::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(Some(self.resolve(character).await?))
    }

    /// Checks whether a character with the given ID exists
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Character::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any character has the given planet as its homeworld
    pub async fn exists_with_homeworld(&self, planet_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Character::find()
            .filter(entity::character::Column::HomeworldId.eq(planet_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any character belongs to the given species
    pub async fn exists_with_species(&self, species_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::Character::find()
            .filter(entity::character::Column::SpeciesId.eq(species_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a new character
    ///
    /// # Returns
    /// - `Ok(Character)` - The created character with its homeworld resolved
    /// - `Err(AppError::ConstraintViolation)` - Species or homeworld does not exist
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, AppError> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(param.name),
            gender: ActiveValue::Set(param.gender.as_str().to_string()),
            species_id: ActiveValue::Set(param.species_id),
            weight: ActiveValue::Set(param.weight),
            hair_color: ActiveValue::Set(param.hair_color),
            eye_color: ActiveValue::Set(param.eye_color),
            birth_year: ActiveValue::Set(param.birth_year),
            homeworld_id: ActiveValue::Set(param.homeworld_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.resolve(character).await
    }

    /// Deletes a character, cascading to its film, starship, and vehicle associations
    ///
    /// # Returns
    /// - `Ok(true)` - The character was deleted
    /// - `Ok(false)` - No character with that ID existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Character::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Loads the homeworld and films of a character entity
    async fn resolve(&self, character: entity::character::Model) -> Result<Character, AppError> {
        let homeworld = character
            .find_related(entity::prelude::Planet)
            .one(self.db)
            .await?;
        let films = character
            .find_related(entity::prelude::Film)
            .order_by_asc(entity::film::Column::Id)
            .all(self.db)
            .await?;

        Character::from_entity(character, homeworld, films)
    }
}
