use super::*;

/// Tests creating a new species.
///
/// Verifies that enumerated fields are stored as their string values and parsed back
/// into the domain model.
///
/// Expected: Ok with species created
#[tokio::test]
async fn creates_species() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kashyyyk = factory::create_planet(db).await?;

    let repo = SpeciesRepository::new(db);
    let mut param = create_param(kashyyyk.id);
    param.designation = Designation::SemiSentient;
    let species = repo.create(param).await?;

    assert_eq!(species.name, "Wookiee");
    assert_eq!(species.classification, Classification::Mammal);
    assert_eq!(species.designation, Designation::SemiSentient);
    assert_eq!(species.homeworld_id, kashyyyk.id);

    let stored = entity::prelude::Species::find_by_id(species.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.classification, "mammal");
    assert_eq!(stored.designation, "semi_sentient");

    Ok(())
}

/// Tests creating a species whose homeworld does not exist.
///
/// Verifies that the foreign key failure is reported as a constraint violation and
/// no row is persisted.
///
/// Expected: Err(AppError::ConstraintViolation)
#[tokio::test]
async fn fails_for_missing_homeworld() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpeciesRepository::new(db);
    let result = repo.create(create_param(999)).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));
    assert_eq!(entity::prelude::Species::find().count(db).await?, 0);

    Ok(())
}
