//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the foreign keys they need as constructor
//! arguments, and the `helpers` module wires whole dependency chains together.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let planet = factory::planet::create_planet(&db).await?;
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (planet, species, character) =
//!         factory::helpers::create_character_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let planet = factory::planet::PlanetFactory::new(&db)
//!     .name("Tatooine")
//!     .population(200_000)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `favorite` - Create favorite entities for a user
//! - `planet` - Create planet entities
//! - `species` - Create species entities on a homeworld
//! - `character` - Create character entities for a species and homeworld
//! - `film` - Create film entities
//! - `starship` - Create starship entities
//! - `vehicle` - Create vehicle entities
//! - `association` - Link characters, films, starships, and vehicles
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod association;
pub mod character;
pub mod favorite;
pub mod film;
pub mod helpers;
pub mod planet;
pub mod species;
pub mod starship;
pub mod user;
pub mod vehicle;

// Re-export commonly used factory functions for concise usage
pub use association::{
    link_character_film, link_character_starship, link_character_vehicle, link_starship_film,
    link_vehicle_film,
};
pub use character::create_character;
pub use favorite::create_favorite;
pub use film::create_film;
pub use helpers::create_character_with_dependencies;
pub use planet::create_planet;
pub use species::create_species;
pub use starship::create_starship;
pub use user::{create_user, create_user_with_email};
pub use vehicle::create_vehicle;
