use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub starship_class: String,
    /// Names of the characters piloting the starship, ordered by character id.
    pub pilots: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStarshipDto {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub hyperdrive_rating: String,
    #[serde(rename = "MGLT")]
    pub mglt: String,
    pub starship_class: String,
}
