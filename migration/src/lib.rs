pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_user_table;
mod m20251020_000002_create_favorite_table;
mod m20251020_000003_create_planet_table;
mod m20251020_000004_create_species_table;
mod m20251020_000005_create_character_table;
mod m20251020_000006_create_film_table;
mod m20251020_000007_create_starship_table;
mod m20251020_000008_create_vehicle_table;
mod m20251020_000009_create_character_film_table;
mod m20251020_000010_create_character_starship_table;
mod m20251020_000011_create_character_vehicle_table;
mod m20251020_000012_create_starship_film_table;
mod m20251020_000013_create_vehicle_film_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_user_table::Migration),
            Box::new(m20251020_000002_create_favorite_table::Migration),
            Box::new(m20251020_000003_create_planet_table::Migration),
            Box::new(m20251020_000004_create_species_table::Migration),
            Box::new(m20251020_000005_create_character_table::Migration),
            Box::new(m20251020_000006_create_film_table::Migration),
            Box::new(m20251020_000007_create_starship_table::Migration),
            Box::new(m20251020_000008_create_vehicle_table::Migration),
            Box::new(m20251020_000009_create_character_film_table::Migration),
            Box::new(m20251020_000010_create_character_starship_table::Migration),
            Box::new(m20251020_000011_create_character_vehicle_table::Migration),
            Box::new(m20251020_000012_create_starship_film_table::Migration),
            Box::new(m20251020_000013_create_vehicle_film_table::Migration),
        ]
    }
}
