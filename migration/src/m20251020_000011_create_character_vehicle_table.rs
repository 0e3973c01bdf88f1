use sea_orm_migration::{prelude::*, schema::*};

use super::m20251020_000005_create_character_table::Character;
use super::m20251020_000008_create_vehicle_table::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CharacterVehicle::Table)
                    .if_not_exists()
                    .col(integer(CharacterVehicle::CharacterId))
                    .col(integer(CharacterVehicle::VehicleId))
                    .primary_key(
                        Index::create()
                            .col(CharacterVehicle::CharacterId)
                            .col(CharacterVehicle::VehicleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_vehicle_character_id")
                            .from(CharacterVehicle::Table, CharacterVehicle::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_vehicle_vehicle_id")
                            .from(CharacterVehicle::Table, CharacterVehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CharacterVehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CharacterVehicle {
    Table,
    CharacterId,
    VehicleId,
}
