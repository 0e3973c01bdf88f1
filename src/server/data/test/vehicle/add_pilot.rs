use super::*;

/// Tests appending a pilot and a film to a vehicle.
///
/// Expected: Ok with the pilot listed on the vehicle
#[tokio::test]
async fn adds_pilot_and_film() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, luke) = factory::create_character_with_dependencies(db).await?;
    let speeder = factory::create_vehicle(db).await?;
    let film = factory::create_film(db).await?;

    let repo = VehicleRepository::new(db);
    repo.add_pilot(speeder.id, luke.id).await?;
    repo.add_film(speeder.id, film.id).await?;

    let speeder = repo.find_by_id(speeder.id).await?.unwrap();
    assert_eq!(speeder.pilots, vec![luke.name]);

    Ok(())
}

/// Tests appending the same pilot twice.
///
/// Expected: Err(AppError::ConstraintViolation)
#[tokio::test]
async fn fails_for_duplicate_pilot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, luke) = factory::create_character_with_dependencies(db).await?;
    let speeder = factory::create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);
    repo.add_pilot(speeder.id, luke.id).await?;
    let result = repo.add_pilot(speeder.id, luke.id).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));

    Ok(())
}
