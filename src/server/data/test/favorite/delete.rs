use super::*;

/// Tests deleting a favorite by ID.
///
/// Expected: Ok(true) and the favorite no longer listed
#[tokio::test]
async fn deletes_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let favorite = factory::create_favorite(db, user.id, "people", 1).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.delete(favorite.id).await?);
    assert!(repo.get_by_user(user.id).await?.is_empty());
    assert!(!repo.delete(favorite.id).await?);

    Ok(())
}
