use super::*;

/// Tests finding a character with films.
///
/// Verifies that film titles are resolved through the association table and ordered
/// by film ID regardless of link order.
///
/// Expected: Ok(Some(Character)) with ordered film titles
#[tokio::test]
async fn finds_character_with_ordered_films() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (planet, _, created) = factory::create_character_with_dependencies(db).await?;
    let new_hope = factory::film::FilmFactory::new(db)
        .title("A New Hope")
        .build()
        .await?;
    let empire = factory::film::FilmFactory::new(db)
        .title("The Empire Strikes Back")
        .episode_id(5)
        .build()
        .await?;

    factory::link_character_film(db, created.id, empire.id).await?;
    factory::link_character_film(db, created.id, new_hope.id).await?;

    let repo = CharacterRepository::new(db);
    let character = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(character.homeworld, Some(planet.name));
    assert_eq!(
        character.films,
        vec!["A New Hope".to_string(), "The Empire Strikes Back".to_string()]
    );

    Ok(())
}

/// Tests finding a character that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert!(repo.find_by_id(1).await?.is_none());

    Ok(())
}

/// Tests reading a character whose stored gender was corrupted.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_for_corrupted_gender() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (planet, species) = factory::helpers::create_species_with_homeworld(db).await?;
    let created = factory::character::CharacterFactory::new(db, species.id, planet.id)
        .gender("droid")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let result = repo.find_by_id(created.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
