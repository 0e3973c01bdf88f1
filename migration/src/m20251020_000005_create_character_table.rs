use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000003_create_planet_table::Planet;
use super::m20251020_000004_create_species_table::Species;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string(Character::Name))
                    .col(string(Character::Gender))
                    .col(integer(Character::SpeciesId))
                    .col(double(Character::Weight))
                    .col(string(Character::HairColor))
                    .col(string(Character::EyeColor))
                    .col(string(Character::BirthYear))
                    .col(integer(Character::HomeworldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_species_id")
                            .from(Character::Table, Character::SpeciesId)
                            .to(Species::Table, Species::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_homeworld_id")
                            .from(Character::Table, Character::HomeworldId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Gender,
    SpeciesId,
    Weight,
    HairColor,
    EyeColor,
    BirthYear,
    HomeworldId,
}
