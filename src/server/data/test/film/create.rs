use super::*;

/// Tests creating a new film.
///
/// Expected: Ok with release date stored as a calendar date and no characters
#[tokio::test]
async fn creates_film() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FilmRepository::new(db);
    let film = repo
        .create(CreateFilmParam {
            title: "The Empire Strikes Back".to_string(),
            episode_id: 5,
            director: "Irvin Kershner".to_string(),
            producer: "Gary Kurtz, Rick McCallum".to_string(),
            release_date: NaiveDate::from_ymd_opt(1980, 5, 17).unwrap(),
            opening_crawl: "It is a dark time for the Rebellion.".to_string(),
        })
        .await?;

    assert!(film.id > 0);
    assert_eq!(film.episode_id, 5);
    assert_eq!(film.release_date, NaiveDate::from_ymd_opt(1980, 5, 17).unwrap());
    assert!(film.characters.is_empty());

    let found = repo.find_by_id(film.id).await?.unwrap();
    assert_eq!(found, film);

    Ok(())
}
