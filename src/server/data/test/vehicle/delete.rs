use super::*;

/// Tests deleting a vehicle that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);

    assert!(!repo.delete(5).await?);

    Ok(())
}

/// Tests deleting an existing vehicle.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vehicle = factory::create_vehicle(db).await?;

    let repo = VehicleRepository::new(db);

    assert!(repo.delete(vehicle.id).await?);
    assert!(!repo.exists(vehicle.id).await?);

    Ok(())
}
