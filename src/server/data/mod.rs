//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same methods run against
//! the pooled `DatabaseConnection` or inside a `DatabaseTransaction`.

pub mod character;
pub mod favorite;
pub mod film;
pub mod planet;
pub mod species;
pub mod starship;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
