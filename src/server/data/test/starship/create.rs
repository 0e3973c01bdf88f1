use super::*;

/// Tests creating a new starship.
///
/// Expected: Ok with every field stored and no pilots
#[tokio::test]
async fn creates_starship() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StarshipRepository::new(db);
    let starship = repo
        .create(CreateStarshipParam {
            name: "X-wing".to_string(),
            model: "T-65 X-wing".to_string(),
            manufacturer: "Incom Corporation".to_string(),
            cost_in_credits: 149_999,
            length: 12,
            max_atmosphering_speed: 1050,
            crew: "1".to_string(),
            passengers: 0,
            cargo_capacity: 110,
            consumables: "1 week".to_string(),
            hyperdrive_rating: "1.0".to_string(),
            mglt: "100".to_string(),
            starship_class: "Starfighter".to_string(),
        })
        .await?;

    assert_eq!(starship.name, "X-wing");
    assert_eq!(starship.cost_in_credits, 149_999);
    assert_eq!(starship.mglt, "100");
    assert!(starship.pilots.is_empty());

    let all = repo.get_all().await?;
    assert_eq!(all, vec![starship]);

    Ok(())
}
