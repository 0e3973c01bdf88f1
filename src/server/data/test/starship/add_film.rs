use super::*;
use entity::prelude::StarshipFilm;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests appending a film to a starship.
///
/// Expected: Ok with one starship_film row
#[tokio::test]
async fn adds_film() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let starship = factory::create_starship(db).await?;
    let film = factory::create_film(db).await?;

    let repo = StarshipRepository::new(db);
    repo.add_film(starship.id, film.id).await?;

    assert_eq!(StarshipFilm::find().count(db).await?, 1);

    Ok(())
}
