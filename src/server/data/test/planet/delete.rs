use super::*;

/// Tests deleting a planet nothing references.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_unreferenced_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;

    let repo = PlanetRepository::new(db);

    assert!(repo.delete(planet.id).await?);
    assert!(!repo.exists(planet.id).await?);

    Ok(())
}

/// Tests deleting a planet that is still a species homeworld.
///
/// Verifies that the restricting foreign key surfaces as a constraint violation and
/// the planet is kept.
///
/// Expected: Err(AppError::ConstraintViolation)
#[tokio::test]
async fn fails_for_referenced_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (planet, _) = factory::helpers::create_species_with_homeworld(db).await?;

    let repo = PlanetRepository::new(db);
    let result = repo.delete(planet.id).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));
    assert!(repo.exists(planet.id).await?);

    Ok(())
}

/// Tests deleting a planet that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);

    assert!(!repo.delete(3).await?);

    Ok(())
}
