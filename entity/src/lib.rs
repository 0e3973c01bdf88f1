//! SeaORM entity definitions for the holocron schema.
//!
//! One module per table. Many-to-many relations are expressed through the
//! association entities (`character_film`, `character_starship`,
//! `character_vehicle`, `starship_film`, `vehicle_film`) and exposed on both
//! sides through `Related::via`.

pub mod prelude;

pub mod character;
pub mod character_film;
pub mod character_starship;
pub mod character_vehicle;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod species;
pub mod starship;
pub mod starship_film;
pub mod user;
pub mod vehicle;
pub mod vehicle_film;
