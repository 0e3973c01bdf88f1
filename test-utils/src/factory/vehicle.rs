//! Vehicle factory for creating test vehicle entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    vehicle_class: String,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Vehicle {id}"`
    /// - vehicle_class: `"repulsorcraft"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Vehicle {}", id),
            vehicle_class: "repulsorcraft".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn vehicle_class(mut self, vehicle_class: impl Into<String>) -> Self {
        self.vehicle_class = vehicle_class.into();
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            model: ActiveValue::Set("X-34 landspeeder".to_string()),
            manufacturer: ActiveValue::Set("SoroSuub Corporation".to_string()),
            length: ActiveValue::Set(3),
            max_atmosphering_speed: ActiveValue::Set(250),
            crew: ActiveValue::Set("1".to_string()),
            passengers: ActiveValue::Set(1),
            cargo_capacity: ActiveValue::Set(5),
            consumables: ActiveValue::Set("none".to_string()),
            vehicle_class: ActiveValue::Set(self.vehicle_class),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a vehicle with default values.
pub async fn create_vehicle(db: &DatabaseConnection) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db).build().await
}
