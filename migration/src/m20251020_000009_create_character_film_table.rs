use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000005_create_character_table::Character;
use super::m20251020_000006_create_film_table::Film;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterFilm::Table)
                    .if_not_exists()
                    .col(integer(CharacterFilm::CharacterId))
                    .col(integer(CharacterFilm::FilmId))
                    .primary_key(
                        Index::create()
                            .col(CharacterFilm::CharacterId)
                            .col(CharacterFilm::FilmId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_film_character_id")
                            .from(CharacterFilm::Table, CharacterFilm::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_film_film_id")
                            .from(CharacterFilm::Table, CharacterFilm::FilmId)
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
            .drop_table(Table::drop().table(CharacterFilm::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacterFilm {
    Table,
    CharacterId,
    FilmId,
}
