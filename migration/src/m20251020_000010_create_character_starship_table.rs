use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000005_create_character_table::Character;
use super::m20251020_000007_create_starship_table::Starship;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterStarship::Table)
                    .if_not_exists()
                    .col(integer(CharacterStarship::CharacterId))
                    .col(integer(CharacterStarship::StarshipId))
                    .primary_key(
                        Index::create()
                            .col(CharacterStarship::CharacterId)
                            .col(CharacterStarship::StarshipId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_starship_character_id")
                            .from(CharacterStarship::Table, CharacterStarship::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_starship_starship_id")
                            .from(CharacterStarship::Table, CharacterStarship::StarshipId)
                            .to(Starship::Table, Starship::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CharacterStarship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacterStarship {
    Table,
    CharacterId,
    StarshipId,
}
