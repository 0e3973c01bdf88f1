use super::*;

/// Tests deleting a film.
///
/// Expected: Ok(true) then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_film() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let film = factory::create_film(db).await?;

    let repo = FilmRepository::new(db);

    assert!(repo.delete(film.id).await?);
    assert!(!repo.delete(film.id).await?);

    Ok(())
}
