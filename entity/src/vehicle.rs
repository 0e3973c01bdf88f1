use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub vehicle_class: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_vehicle::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_vehicle::Relation::Vehicle.def().rev())
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::vehicle_film::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vehicle_film::Relation::Vehicle.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
