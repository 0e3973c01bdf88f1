use super::*;

/// Tests listing characters in storage order.
///
/// Expected: Ok with characters ordered by ID, each with its own homeworld
#[tokio::test]
async fn lists_characters_ordered_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tatooine = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .build()
        .await?;
    let alderaan = factory::planet::PlanetFactory::new(db)
        .name("Alderaan")
        .build()
        .await?;
    let human = factory::create_species(db, tatooine.id).await?;

    factory::character::CharacterFactory::new(db, human.id, tatooine.id)
        .name("Luke Skywalker")
        .build()
        .await?;
    factory::character::CharacterFactory::new(db, human.id, alderaan.id)
        .name("Leia Organa")
        .gender("femenine")
        .build()
        .await?;

    let repo = CharacterRepository::new(db);
    let characters = repo.get_all().await?;

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].name, "Luke Skywalker");
    assert_eq!(characters[0].homeworld.as_deref(), Some("Tatooine"));
    assert_eq!(characters[1].name, "Leia Organa");
    assert_eq!(characters[1].gender, Gender::Femenine);
    assert_eq!(characters[1].homeworld.as_deref(), Some("Alderaan"));

    Ok(())
}

/// Tests listing characters that share some films but not others.
///
/// Verifies each listed character receives only its own films, ordered by film ID
/// regardless of link order, and a character without films gets an empty list.
///
/// Expected: Ok with per-character film titles
#[tokio::test]
async fn lists_each_character_with_its_own_films() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_universe_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tatooine = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .build()
        .await?;
    let human = factory::create_species(db, tatooine.id).await?;

    let luke = factory::character::CharacterFactory::new(db, human.id, tatooine.id)
        .name("Luke Skywalker")
        .build()
        .await?;
    let anakin = factory::character::CharacterFactory::new(db, human.id, tatooine.id)
        .name("Anakin Skywalker")
        .build()
        .await?;
    factory::character::CharacterFactory::new(db, human.id, tatooine.id)
        .name("Owen Lars")
        .build()
        .await?;

    let new_hope = factory::film::FilmFactory::new(db)
        .title("A New Hope")
        .build()
        .await?;
    let phantom_menace = factory::film::FilmFactory::new(db)
        .title("The Phantom Menace")
        .episode_id(1)
        .build()
        .await?;

    factory::link_character_film(db, anakin.id, phantom_menace.id).await?;
    factory::link_character_film(db, luke.id, new_hope.id).await?;
    factory::link_character_film(db, anakin.id, new_hope.id).await?;

    let characters = CharacterRepository::new(db).get_all().await?;

    assert_eq!(characters.len(), 3);
    assert_eq!(characters[0].films, vec!["A New Hope".to_string()]);
    assert_eq!(
        characters[1].films,
        vec!["A New Hope".to_string(), "The Phantom Menace".to_string()]
    );
    assert!(characters[2].films.is_empty());
    assert_eq!(characters[2].homeworld.as_deref(), Some("Tatooine"));

    Ok(())
}
