//! Starship factory for creating test starship entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test starships.
pub struct StarshipFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    starship_class: String,
    mglt: String,
}

impl<'a> StarshipFactory<'a> {
    /// Creates a new StarshipFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Starship {id}"`
    /// - starship_class: `"Light freighter"`
    /// - mglt: `"75"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Starship {}", id),
            starship_class: "Light freighter".to_string(),
            mglt: "75".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn starship_class(mut self, starship_class: impl Into<String>) -> Self {
        self.starship_class = starship_class.into();
        self
    }

    pub fn mglt(mut self, mglt: impl Into<String>) -> Self {
        self.mglt = mglt.into();
        self
    }

    /// Builds and inserts the starship entity into the database.
    pub async fn build(self) -> Result<entity::starship::Model, DbErr> {
        entity::starship::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set("YT-1300 light freighter".to_string()),
            manufacturer: ActiveValue::Set("Corellian Engineering Corporation".to_string()),
            cost_in_credits: ActiveValue::Set(100_000),
            length: ActiveValue::Set(34),
            max_atmosphering_speed: ActiveValue::Set(1050),
            crew: ActiveValue::Set("4".to_string()),
            passengers: ActiveValue::Set(6),
            cargo_capacity: ActiveValue::Set(100_000),
            consumables: ActiveValue::Set("2 months".to_string()),
            hyperdrive_rating: ActiveValue::Set("0.5".to_string()),
            mglt: ActiveValue::Set(self.mglt),
            starship_class: ActiveValue::Set(self.starship_class),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a starship with default values.
pub async fn create_starship(db: &DatabaseConnection) -> Result<entity::starship::Model, DbErr> {
    StarshipFactory::new(db).build().await
}
