use super::*;

/// Tests finding a favorite by user and item.
///
/// Verifies that the category takes part in the match: a planet with the same id
/// as a favorited character is not found.
///
/// Expected: Ok(Some) for the matching item, Ok(None) otherwise
#[tokio::test]
async fn matches_on_category_and_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let stored = factory::create_favorite(db, user.id, "people", 4).await?;

    let repo = FavoriteRepository::new(db);

    let found = repo.find_one(user.id, FavoriteItem::People(4)).await?;
    assert_eq!(found.map(|f| f.id), Some(stored.id));

    let missing = repo.find_one(user.id, FavoriteItem::Planet(4)).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests finding a favorite owned by another user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_users() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_favorite(db, owner.id, "planets", 1).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.find_one(other.id, FavoriteItem::Planet(1)).await?.is_none());

    Ok(())
}
