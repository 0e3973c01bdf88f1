use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "film")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub episode_id: i32,
    pub director: String,
    pub producer: String,
    pub release_date: Date,
    pub opening_crawl: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_film::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_film::Relation::Film.def().rev())
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_film::Relation::Starship.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_film::Relation::Film.def().rev())
    }
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        super::vehicle_film::Relation::Vehicle.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::vehicle_film::Relation::Film.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
