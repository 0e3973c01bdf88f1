use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000003_create_planet_table::Planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Species::Table)
                    .if_not_exists()
                    .col(pk_auto(Species::Id))
                    .col(string(Species::Name))
                    .col(string(Species::Classification))
                    .col(string(Species::Designation))
                    .col(double(Species::AverageHeight))
                    .col(string(Species::SkinColors))
                    .col(string(Species::HairColors))
                    .col(string(Species::EyeColors))
                    .col(string(Species::AverageLifespanInYears))
                    .col(string(Species::Language))
                    .col(integer(Species::HomeworldId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_homeworld_id")
                            .from(Species::Table, Species::HomeworldId)
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
            .drop_table(Table::drop().table(Species::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Species {
    Table,
    Id,
    Name,
    Classification,
    Designation,
    AverageHeight,
    SkinColors,
    HairColors,
    EyeColors,
    AverageLifespanInYears,
    Language,
    HomeworldId,
}
