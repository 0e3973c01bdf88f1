use super::*;

/// Tests finding an existing species.
///
/// Expected: Ok(Some(Species)) exposing the homeworld id
#[tokio::test]
async fn finds_existing_species() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (planet, created) = factory::helpers::create_species_with_homeworld(db).await?;

    let repo = SpeciesRepository::new(db);
    let species = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(species.id, created.id);
    assert_eq!(species.homeworld_id, planet.id);

    Ok(())
}

/// Tests reading a species whose stored classification was corrupted.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_for_corrupted_classification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;
    let created = factory::species::SpeciesFactory::new(db, planet.id)
        .classification("mineral")
        .build()
        .await?;

    let repo = SpeciesRepository::new(db);
    let result = repo.find_by_id(created.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
