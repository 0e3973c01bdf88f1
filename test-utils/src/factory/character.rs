//! Character factory for creating test character entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters.
///
/// # Example
///
/// ```rust,ignore
/// let luke = CharacterFactory::new(&db, human.id, tatooine.id)
///     .name("Luke Skywalker")
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    species_id: i32,
    homeworld_id: i32,
    name: String,
    gender: String,
    weight: f64,
    birth_year: String,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - gender: `"masculine"`
    /// - weight: `77.0`
    /// - birth_year: `"19BBY"`
    pub fn new(db: &'a DatabaseConnection, species_id: i32, homeworld_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            species_id,
            homeworld_id,
            name: format!("Character {}", id),
            gender: "masculine".to_string(),
            weight: 77.0,
            birth_year: "19BBY".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored gender string.
    pub fn gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn birth_year(mut self, birth_year: impl Into<String>) -> Self {
        self.birth_year = birth_year.into();
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            gender: ActiveValue::Set(self.gender),
            species_id: ActiveValue::Set(self.species_id),
            weight: ActiveValue::Set(self.weight),
            hair_color: ActiveValue::Set("blond".to_string()),
            eye_color: ActiveValue::Set("blue".to_string()),
            birth_year: ActiveValue::Set(self.birth_year),
            homeworld_id: ActiveValue::Set(self.homeworld_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
pub async fn create_character(
    db: &DatabaseConnection,
    species_id: i32,
    homeworld_id: i32,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db, species_id, homeworld_id)
        .build()
        .await
}
