use super::*;
use entity::prelude::{CharacterStarship, Character};
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests deleting a starship with a pilot.
///
/// Verifies that the pilot association is removed while the character is kept.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deletes_starship_and_cascades_pilots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, pilot) = factory::create_character_with_dependencies(db).await?;
    let starship = factory::create_starship(db).await?;
    factory::link_character_starship(db, pilot.id, starship.id).await?;

    let repo = StarshipRepository::new(db);

    assert!(repo.delete(starship.id).await?);
    assert_eq!(CharacterStarship::find().count(db).await?, 0);
    assert_eq!(Character::find().count(db).await?, 1);

    Ok(())
}
