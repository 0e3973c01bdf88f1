use crate::server::{
    error::AppError,
    model::favorite::{FavoriteItem, FavoriteTarget},
    service::favorite::FavoriteService,
};
use entity::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests the full favorites flow for one user: add two favorites, list them,
/// remove one, and list again.
///
/// Expected: Ok with one favorite left, the planet
#[tokio::test]
async fn add_list_and_remove() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = FavoriteService::new(db);

    let person = service.add(user.id, "people", 1).await?;
    let planet = service.add(user.id, "planets", 2).await?;
    assert_eq!(person.item, FavoriteItem::People(1));
    assert_eq!(planet.item, FavoriteItem::Planet(2));
    assert_eq!(service.get_by_user(user.id).await?.len(), 2);

    service.remove(user.id, "people", 1).await?;

    let remaining = service.get_by_user(user.id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, planet.id);

    Ok(())
}

/// Tests adding a favorite with a category other than `people` or `planets`.
///
/// Verifies the category is checked before the user, so even a missing user
/// yields a bad request.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn add_rejects_invalid_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db).add(999, "starships", 1).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(Favorite::find().count(db).await?, 0);

    Ok(())
}

/// Tests adding a favorite for a user that does not exist.
///
/// Expected: Err(AppError::NotFound) and nothing stored
#[tokio::test]
async fn add_fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db).add(999, "planets", 1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(Favorite::find().count(db).await?, 0);

    Ok(())
}

/// Tests adding the same favorite twice.
///
/// Expected: Ok with two distinct rows stored
#[tokio::test]
async fn add_keeps_duplicates() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = FavoriteService::new(db);

    let first = service.add(user.id, "planets", 3).await?;
    let second = service.add(user.id, "planets", 3).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(service.get_by_user(user.id).await?.len(), 2);

    Ok(())
}

/// Tests removing a favorite the user never added.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn remove_fails_for_missing_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteService::new(db).remove(user.id, "people", 1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests removing a favorite with an invalid category.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn remove_rejects_invalid_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = FavoriteService::new(db).remove(user.id, "films", 1).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests removing one of two identical favorites.
///
/// Expected: Ok with exactly one row left
#[tokio::test]
async fn remove_deletes_single_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, "people", 4).await?;
    factory::create_favorite(db, user.id, "people", 4).await?;

    FavoriteService::new(db).remove(user.id, "people", 4).await?;

    assert_eq!(Favorite::find().count(db).await?, 1);

    Ok(())
}

/// Tests listing favorites of a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_by_user_fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = FavoriteService::new(db).get_by_user(1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests resolving a favorited planet to its record.
///
/// Expected: Ok(FavoriteTarget::Planet) with the planet's name
#[tokio::test]
async fn get_item_resolves_planet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let tatooine = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .build()
        .await?;

    let service = FavoriteService::new(db);
    service.add(user.id, "planets", tatooine.id).await?;

    let target = service.get_item(user.id, "planets", tatooine.id).await?;

    match target {
        FavoriteTarget::Planet(planet) => assert_eq!(planet.name, "Tatooine"),
        other => panic!("expected planet, got {:?}", other),
    }

    Ok(())
}

/// Tests resolving a favorite whose item id points at nothing.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_item_fails_for_dangling_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let service = FavoriteService::new(db);
    service.add(user.id, "people", 404).await?;

    let result = service.get_item(user.id, "people", 404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests resolving a character item directly.
///
/// Expected: Ok(Some(FavoriteTarget::People))
#[tokio::test]
async fn resolve_finds_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_planet, _species, character) = factory::create_character_with_dependencies(db).await?;

    let target = FavoriteService::new(db)
        .resolve(FavoriteItem::People(character.id))
        .await?;

    assert!(matches!(target, Some(FavoriteTarget::People(c)) if c.id == character.id));

    Ok(())
}
