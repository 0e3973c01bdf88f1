use super::*;

/// Tests finding an existing planet.
///
/// Expected: Ok(Some(Planet))
#[tokio::test]
async fn finds_existing_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Hoth")
        .climate("frozen")
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let planet = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(planet.name, "Hoth");
    assert_eq!(planet.climate, "frozen");

    Ok(())
}

/// Tests finding a planet that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);

    assert!(repo.find_by_id(1).await?.is_none());
    assert!(!repo.exists(1).await?);

    Ok(())
}
