use super::*;

/// Tests creating a character on an existing homeworld.
///
/// Verifies that the created character resolves its homeworld to the planet's name
/// and starts with no films.
///
/// Expected: Ok with homeworld "Tatooine"
#[tokio::test]
async fn creates_character_with_homeworld_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tatooine = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .build()
        .await?;
    let human = factory::create_species(db, tatooine.id).await?;

    let repo = CharacterRepository::new(db);
    let character = repo.create(create_param(human.id, tatooine.id)).await?;

    assert_eq!(character.name, "Luke Skywalker");
    assert_eq!(character.gender, Gender::Masculine);
    assert_eq!(character.homeworld.as_deref(), Some("Tatooine"));
    assert!(character.films.is_empty());

    let stored = entity::prelude::Character::find_by_id(character.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.gender, "masculine");

    Ok(())
}

/// Tests creating a character referencing a missing species.
///
/// Expected: Err(AppError::ConstraintViolation) and no row persisted
#[tokio::test]
async fn fails_for_missing_species() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = CharacterRepository::new(db);
    let result = repo.create(create_param(404, planet.id)).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));
    assert_eq!(entity::prelude::Character::find().count(db).await?, 0);

    Ok(())
}
