use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000007_create_starship_table::Starship;
use super::m20251020_000006_create_film_table::Film;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StarshipFilm::Table)
                    .if_not_exists()
                    .col(integer(StarshipFilm::StarshipId))
                    .col(integer(StarshipFilm::FilmId))
                    .primary_key(
                        Index::create()
                            .col(StarshipFilm::StarshipId)
                            .col(StarshipFilm::FilmId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_starship_film_starship_id")
                            .from(StarshipFilm::Table, StarshipFilm::StarshipId)
                            .to(Starship::Table, Starship::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_starship_film_film_id")
                            .from(StarshipFilm::Table, StarshipFilm::FilmId)
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
            .drop_table(Table::drop().table(StarshipFilm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StarshipFilm {
    Table,
    StarshipId,
    FilmId,
}
