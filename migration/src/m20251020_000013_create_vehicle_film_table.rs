use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000008_create_vehicle_table::Vehicle;
use super::m20251020_000006_create_film_table::Film;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleFilm::Table)
                    .if_not_exists()
                    .col(integer(VehicleFilm::VehicleId))
                    .col(integer(VehicleFilm::FilmId))
                    .primary_key(
                        Index::create()
                            .col(VehicleFilm::VehicleId)
                            .col(VehicleFilm::FilmId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_film_vehicle_id")
                            .from(VehicleFilm::Table, VehicleFilm::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_film_film_id")
                            .from(VehicleFilm::Table, VehicleFilm::FilmId)
                            .to(Film::Table, Film::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleFilm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VehicleFilm {
    Table,
    VehicleId,
    FilmId,
}
