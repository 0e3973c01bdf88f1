use super::*;

/// Tests appending pilots to a starship.
///
/// Expected: Ok with pilot names ordered by character ID
#[tokio::test]
async fn adds_pilots_in_id_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (planet, species, han) = factory::create_character_with_dependencies(db).await?;
    let chewie = factory::character::CharacterFactory::new(db, species.id, planet.id)
        .name("Chewbacca")
        .build()
        .await?;
    let falcon = factory::starship::StarshipFactory::new(db)
        .name("Millennium Falcon")
        .build()
        .await?;

    let repo = StarshipRepository::new(db);
    repo.add_pilot(falcon.id, chewie.id).await?;
    repo.add_pilot(falcon.id, han.id).await?;

    let falcon = repo.find_by_id(falcon.id).await?.unwrap();
    assert_eq!(falcon.pilots, vec![han.name, chewie.name]);

    Ok(())
}

/// Tests appending a pilot that does not exist.
///
/// Expected: Err(AppError::ConstraintViolation)
#[tokio::test]
async fn fails_for_missing_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = factory::create_starship(db).await?;

    let repo = StarshipRepository::new(db);
    let result = repo.add_pilot(starship.id, 12).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));

    Ok(())
}
