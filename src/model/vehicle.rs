use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub vehicle_class: String,
    pub pilots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVehicleDto {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub vehicle_class: String,
}
