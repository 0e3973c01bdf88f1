//! Species factory for creating test species entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test species on a given homeworld.
///
/// Classification and designation are stored as their API strings
/// (`"mammal"`, `"sentient"`, ...).
pub struct SpeciesFactory<'a> {
    db: &'a DatabaseConnection,
    homeworld_id: i32,
    name: String,
    classification: String,
    designation: String,
    average_height: f64,
    language: String,
}

impl<'a> SpeciesFactory<'a> {
    /// Creates a new SpeciesFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Species {id}"`
    /// - classification: `"mammal"`
    /// - designation: `"sentient"`
    /// - average_height: `1.8`
    /// - language: `"Galactic Basic"`
    pub fn new(db: &'a DatabaseConnection, homeworld_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            homeworld_id,
            name: format!("Species {}", id),
            classification: "mammal".to_string(),
            designation: "sentient".to_string(),
            average_height: 1.8,
            language: "Galactic Basic".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the stored classification string.
    pub fn classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = classification.into();
        self
    }

    /// Sets the stored designation string.
    pub fn designation(mut self, designation: impl Into<String>) -> Self {
        self.designation = designation.into();
        self
    }

    pub fn average_height(mut self, average_height: f64) -> Self {
        self.average_height = average_height;
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builds and inserts the species entity into the database.
    pub async fn build(self) -> Result<entity::species::Model, DbErr> {
        entity::species::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            classification: ActiveValue::Set(self.classification),
            designation: ActiveValue::Set(self.designation),
            average_height: ActiveValue::Set(self.average_height),
            skin_colors: ActiveValue::Set("green, brown".to_string()),
            hair_colors: ActiveValue::Set("none".to_string()),
            eye_colors: ActiveValue::Set("black".to_string()),
            average_lifespan_in_years: ActiveValue::Set("80".to_string()),
            language: ActiveValue::Set(self.language),
            homeworld_id: ActiveValue::Set(self.homeworld_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a species with default values on the given homeworld.
pub async fn create_species(
    db: &DatabaseConnection,
    homeworld_id: i32,
) -> Result<entity::species::Model, DbErr> {
    SpeciesFactory::new(db, homeworld_id).build().await
}
