use super::*;

/// Tests listing the favorites of a user.
///
/// Verifies that favorites of other users are excluded.
///
/// Expected: Ok with only the user's favorites, ordered by ID
#[tokio::test]
async fn lists_only_own_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, "people", 1).await?;
    factory::create_favorite(db, other.id, "people", 2).await?;
    factory::create_favorite(db, user.id, "planets", 3).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user(user.id).await?;

    let items: Vec<_> = favorites.iter().map(|f| f.item).collect();
    assert_eq!(
        items,
        vec![FavoriteItem::People(1), FavoriteItem::Planet(3)]
    );

    Ok(())
}

/// Tests listing favorites when a stored category was corrupted.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_for_corrupted_category() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, "starships", 1).await?;

    let repo = FavoriteRepository::new(db);
    let result = repo.get_by_user(user.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
