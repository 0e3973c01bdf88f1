use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Film::Table)
                    .if_not_exists()
                    .col(pk_auto(Film::Id))
                    .col(string(Film::Title))
                    .col(integer(Film::EpisodeId))
                    .col(string(Film::Director))
                    .col(string(Film::Producer))
                    .col(date(Film::ReleaseDate))
                    .col(text(Film::OpeningCrawl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Film::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Film {
    Table,
    Id,
    Title,
    EpisodeId,
    Director,
    Producer,
    ReleaseDate,
    OpeningCrawl,
}
