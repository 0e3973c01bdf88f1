//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// name or email to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a character with all dependencies.
///
/// This is a convenience method that creates:
/// 1. Planet (used as homeworld of both species and character)
/// 2. Species
/// 3. Character
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((planet, species, character))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_character_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::planet::Model,
        entity::species::Model,
        entity::character::Model,
    ),
    DbErr,
> {
    let planet = crate::factory::planet::create_planet(db).await?;
    let species = crate::factory::species::create_species(db, planet.id).await?;
    let character = crate::factory::character::create_character(db, species.id, planet.id).await?;

    Ok((planet, species, character))
}

/// Creates a species with a freshly created homeworld.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((planet, species))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_species_with_homeworld(
    db: &DatabaseConnection,
) -> Result<(entity::planet::Model, entity::species::Model), DbErr> {
    let planet = crate::factory::planet::create_planet(db).await?;
    let species = crate::factory::species::create_species(db, planet.id).await?;

    Ok((planet, species))
}
