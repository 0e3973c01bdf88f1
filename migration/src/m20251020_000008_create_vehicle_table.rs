use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string(Vehicle::Name))
                    .col(string(Vehicle::Model))
                    .col(string(Vehicle::Manufacturer))
                    .col(big_integer(Vehicle::Length))
                    .col(big_integer(Vehicle::MaxAtmospheringSpeed))
                    .col(string(Vehicle::Crew))
                    .col(big_integer(Vehicle::Passengers))
                    .col(big_integer(Vehicle::CargoCapacity))
                    .col(string(Vehicle::Consumables))
                    .col(string(Vehicle::VehicleClass))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    Manufacturer,
    Length,
    MaxAtmospheringSpeed,
    Crew,
    Passengers,
    CargoCapacity,
    Consumables,
    VehicleClass,
}
