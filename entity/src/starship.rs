use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: i64,
    pub max_atmosphering_speed: i64,
    pub crew: String,
    pub passengers: i64,
    pub cargo_capacity: i64,
    pub consumables: String,
    pub hyperdrive_rating: String,
    /// Megalights per hour, exposed as `MGLT` in the API.
    pub mglt: String,
    pub starship_class: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        super::character_starship::Relation::Character.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::character_starship::Relation::Starship.def().rev())
    }
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        super::starship_film::Relation::Film.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::starship_film::Relation::Starship.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
