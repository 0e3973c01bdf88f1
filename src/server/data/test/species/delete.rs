use super::*;

/// Tests deleting a species with no members.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_species() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, species) = factory::helpers::create_species_with_homeworld(db).await?;

    let repo = SpeciesRepository::new(db);

    assert!(repo.delete(species.id).await?);
    assert!(!repo.exists(species.id).await?);

    Ok(())
}

/// Tests deleting a species that characters still belong to.
///
/// Expected: Err(AppError::ConstraintViolation)
#[tokio::test]
async fn fails_for_species_with_members() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, species, _) = factory::create_character_with_dependencies(db).await?;

    let repo = SpeciesRepository::new(db);
    let result = repo.delete(species.id).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));

    Ok(())
}
