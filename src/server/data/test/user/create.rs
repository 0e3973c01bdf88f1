use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the email, the plaintext password, and the
/// active flag exactly as provided.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_param("luke@rebellion.org")).await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "luke@rebellion.org");

    let stored = User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.password, "hunter2");
    assert!(stored.is_active);

    Ok(())
}

/// Tests creating a user with an email that is already registered.
///
/// Verifies that the unique constraint on email surfaces as a constraint violation
/// rather than a generic database error.
///
/// Expected: Err(AppError::ConstraintViolation)
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_email(db, "han@falcon.net").await?;

    let repo = UserRepository::new(db);
    let result = repo.create(create_param("han@falcon.net")).await;

    assert!(matches!(result, Err(AppError::ConstraintViolation(_))));

    Ok(())
}

/// Tests creating a user when the table does not exist.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.create(create_param("leia@alderaan.gov")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
