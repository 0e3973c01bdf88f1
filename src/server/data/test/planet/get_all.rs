use super::*;

/// Tests listing planets in storage order.
///
/// Expected: Ok with planets ordered by ID
#[tokio::test]
async fn lists_planets_ordered_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alderaan = factory::planet::PlanetFactory::new(db)
        .name("Alderaan")
        .build()
        .await?;
    let yavin = factory::planet::PlanetFactory::new(db)
        .name("Yavin IV")
        .build()
        .await?;

    let repo = PlanetRepository::new(db);
    let planets = repo.get_all().await?;

    let names: Vec<_> = planets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alderaan", "Yavin IV"]);
    assert_eq!(planets[0].id, alderaan.id);
    assert_eq!(planets[1].id, yavin.id);

    Ok(())
}
