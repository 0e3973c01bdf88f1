use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Starship::Table)
                    .if_not_exists()
                    .col(pk_auto(Starship::Id))
                    .col(string(Starship::Name))
                    .col(string(Starship::Model))
                    .col(string(Starship::Manufacturer))
                    .col(big_integer(Starship::CostInCredits))
                    .col(big_integer(Starship::Length))
                    .col(big_integer(Starship::MaxAtmospheringSpeed))
                    .col(string(Starship::Crew))
                    .col(big_integer(Starship::Passengers))
                    .col(big_integer(Starship::CargoCapacity))
                    .col(string(Starship::Consumables))
                    .col(string(Starship::HyperdriveRating))
                    .col(string(Starship::Mglt))
                    .col(string(Starship::StarshipClass))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Starship {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    CostInCredits,
    Length,
    MaxAtmospheringSpeed,
    Crew,
    Passengers,
    CargoCapacity,
    Consumables,
    HyperdriveRating,
    Mglt,
    StarshipClass,
}
