use super::*;

/// Tests deleting a character linked to a film.
///
/// Verifies that the association row is removed with the character while the film
/// itself is kept.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_character_and_cascades_links() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, character) = factory::create_character_with_dependencies(db).await?;
    let film = factory::create_film(db).await?;
    factory::link_character_film(db, character.id, film.id).await?;

    let repo = CharacterRepository::new(db);

    assert!(repo.delete(character.id).await?);
    assert_eq!(CharacterFilm::find().count(db).await?, 0);
    assert_eq!(Film::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a character that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_character() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CharacterRepository::new(db);

    assert!(!repo.delete(1).await?);

    Ok(())
}
