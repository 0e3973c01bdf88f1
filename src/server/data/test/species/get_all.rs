use super::*;

/// Tests listing species in storage order.
///
/// Expected: Ok with species ordered by ID
#[tokio::test]
async fn lists_species_ordered_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planet = factory::create_planet(db).await?;
    let first = factory::create_species(db, planet.id).await?;
    let second = factory::species::SpeciesFactory::new(db, planet.id)
        .classification("reptile")
        .designation("non_sentient")
        .build()
        .await?;

    let repo = SpeciesRepository::new(db);
    let species = repo.get_all().await?;

    assert_eq!(species.len(), 2);
    assert_eq!(species[0].id, first.id);
    assert_eq!(species[1].id, second.id);
    assert_eq!(species[1].classification, Classification::Reptile);
    assert_eq!(species[1].designation, Designation::NonSentient);

    Ok(())
}
