//! Helpers for linking entities through the association tables.
//!
//! Each function inserts a single association row and returns it.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Records that a character appears in a film.
pub async fn link_character_film(
    db: &DatabaseConnection,
    character_id: i32,
    film_id: i32,
) -> Result<entity::character_film::Model, DbErr> {
    entity::character_film::ActiveModel {
        character_id: ActiveValue::Set(character_id),
        film_id: ActiveValue::Set(film_id),
    }
    .insert(db)
    .await
}

/// Records that a character pilots a starship.
pub async fn link_character_starship(
    db: &DatabaseConnection,
    character_id: i32,
    starship_id: i32,
) -> Result<entity::character_starship::Model, DbErr> {
    entity::character_starship::ActiveModel {
        character_id: ActiveValue::Set(character_id),
        starship_id: ActiveValue::Set(starship_id),
    }
    .insert(db)
    .await
}

/// Records that a character pilots a vehicle.
pub async fn link_character_vehicle(
    db: &DatabaseConnection,
    character_id: i32,
    vehicle_id: i32,
) -> Result<entity::character_vehicle::Model, DbErr> {
    entity::character_vehicle::ActiveModel {
        character_id: ActiveValue::Set(character_id),
        vehicle_id: ActiveValue::Set(vehicle_id),
    }
    .insert(db)
    .await
}

/// Records that a starship appears in a film.
pub async fn link_starship_film(
    db: &DatabaseConnection,
    starship_id: i32,
    film_id: i32,
) -> Result<entity::starship_film::Model, DbErr> {
    entity::starship_film::ActiveModel {
        starship_id: ActiveValue::Set(starship_id),
        film_id: ActiveValue::Set(film_id),
    }
    .insert(db)
    .await
}

/// Records that a vehicle appears in a film.
pub async fn link_vehicle_film(
    db: &DatabaseConnection,
    vehicle_id: i32,
    film_id: i32,
) -> Result<entity::vehicle_film::Model, DbErr> {
    entity::vehicle_film::ActiveModel {
        vehicle_id: ActiveValue::Set(vehicle_id),
        film_id: ActiveValue::Set(film_id),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::{create_film, helpers::create_character_with_dependencies};

    #[tokio::test]
    async fn rejects_link_to_missing_film() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_universe_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, character) = create_character_with_dependencies(db).await?;

        let result = link_character_film(db, character.id, 9999).await;

        assert!(result.is_err());

        Ok(())
    }

    #[tokio::test]
    async fn links_character_to_film() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_universe_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, _, character) = create_character_with_dependencies(db).await?;
        let film = create_film(db).await?;

        let link = link_character_film(db, character.id, film.id).await?;

        assert_eq!(link.character_id, character.id);
        assert_eq!(link.film_id, film.id);

        Ok(())
    }
}
