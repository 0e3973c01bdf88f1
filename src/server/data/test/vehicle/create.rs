use super::*;

/// Tests creating a new vehicle.
///
/// Expected: Ok with every field stored and no pilots
#[tokio::test]
async fn creates_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VehicleRepository::new(db);
    let vehicle = repo
        .create(CreateVehicleParam {
            name: "Snowspeeder".to_string(),
            model: "t-47 airspeeder".to_string(),
            manufacturer: "Incom corporation".to_string(),
            length: 4,
            max_atmosphering_speed: 650,
            crew: "2".to_string(),
            passengers: 0,
            cargo_capacity: 10,
            consumables: "none".to_string(),
            vehicle_class: "airspeeder".to_string(),
        })
        .await?;

    assert_eq!(vehicle.name, "Snowspeeder");
    assert_eq!(vehicle.vehicle_class, "airspeeder");
    assert!(vehicle.pilots.is_empty());

    let found = repo.find_by_id(vehicle.id).await?.unwrap();
    assert_eq!(found, vehicle);

    Ok(())
}
