use super::*;

/// Tests creating a new planet.
///
/// Expected: Ok with every supplied field stored
#[tokio::test]
async fn creates_planet() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlanetRepository::new(db);
    let planet = repo
        .create(CreatePlanetParam {
            name: "Tatooine".to_string(),
            climate: "arid".to_string(),
            terrain: "desert".to_string(),
            population: 200_000,
        })
        .await?;

    assert!(planet.id > 0);
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.climate, "arid");
    assert_eq!(planet.terrain, "desert");
    assert_eq!(planet.population, 200_000);

    Ok(())
}
