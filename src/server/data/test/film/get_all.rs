use super::*;

/// Tests listing films with their characters resolved.
///
/// Expected: Ok with each film listing only its own characters
#[tokio::test]
async fn lists_films_with_characters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (planet, species, luke) = factory::create_character_with_dependencies(db).await?;
    let leia = factory::character::CharacterFactory::new(db, species.id, planet.id)
        .name("Leia Organa")
        .build()
        .await?;
    let new_hope = factory::create_film(db).await?;
    let empire = factory::create_film(db).await?;

    factory::link_character_film(db, leia.id, new_hope.id).await?;
    factory::link_character_film(db, luke.id, new_hope.id).await?;
    factory::link_character_film(db, leia.id, empire.id).await?;

    let repo = FilmRepository::new(db);
    let films = repo.get_all().await?;

    assert_eq!(films.len(), 2);
    assert_eq!(films[0].characters, vec![luke.name, leia.name.clone()]);
    assert_eq!(films[1].characters, vec![leia.name]);

    Ok(())
}
