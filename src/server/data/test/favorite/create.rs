use super::*;

/// Tests creating a favorite.
///
/// Verifies that the item id is stored without checking the target table.
///
/// Expected: Ok with favorite created
#[tokio::test]
async fn creates_favorite_without_checking_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo.create(user.id, FavoriteItem::Planet(999)).await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.item, FavoriteItem::Planet(999));

    Ok(())
}

/// Tests creating a favorite for a user that does not exist.
///
/// Expected: Err(AppError::ConstraintViolation)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FavoriteRepository::new(db);
    let result = repo.create(1, FavoriteItem::People(1)).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));

    Ok(())
}

/// Tests creating the same favorite twice.
///
/// Duplicates are not rejected; both rows are stored.
///
/// Expected: Ok with two distinct favorites
#[tokio::test]
async fn stores_duplicate_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = FavoriteRepository::new(db);
    let first = repo.create(user.id, FavoriteItem::People(1)).await?;
    let second = repo.create(user.id, FavoriteItem::People(1)).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(repo.get_by_user(user.id).await?.len(), 2);

    Ok(())
}
