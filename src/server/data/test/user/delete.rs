use super::*;

/// Tests deleting a user with favorites.
///
/// Verifies that the favorites of the deleted user are removed by the cascading
/// foreign key.
///
/// Expected: Ok(true) and no favorites left
#[tokio::test]
async fn deletes_user_and_cascades_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_favorite(db, user.id, "people", 1).await?;
    factory::create_favorite(db, user.id, "planets", 2).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    assert!(Favorite::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete(7).await?;

    assert!(!deleted);

    Ok(())
}
