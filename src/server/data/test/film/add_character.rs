use super::*;

/// Tests appending a character to a film.
///
/// Expected: Ok with the character listed on the film
#[tokio::test]
async fn adds_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, character) = factory::create_character_with_dependencies(db).await?;
    let film = factory::create_film(db).await?;

    let repo = FilmRepository::new(db);
    repo.add_character(film.id, character.id).await?;

    let film = repo.find_by_id(film.id).await?.unwrap();
    assert_eq!(film.characters, vec![character.name]);

    Ok(())
}

/// Tests appending a character that does not exist.
///
/// Expected: Err(AppError::ConstraintViolation)
#[tokio::test]
async fn fails_for_missing_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let film = factory::create_film(db).await?;

    let repo = FilmRepository::new(db);
    let result = repo.add_character(film.id, 77).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));

    Ok(())
}
