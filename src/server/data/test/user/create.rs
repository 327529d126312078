use super::*;

/// Tests creating an account with valid unique fields.
///
/// Expected: Ok with the stored fields and the requested role
#[tokio::test]
async fn creates_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let account = repo.create(account_params("ada", Role::Student)).await?;

    assert_eq!(account.username, "ada");
    assert_eq!(account.email, "ada@example.com");
    assert_eq!(account.role, Role::Student);

    // Verify the row exists in the database
    let stored = entity::prelude::User::find_by_id(account.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that a duplicate username is rejected.
///
/// Expected: Err(Conflict) naming the username, and no second row
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(account_params("grace", Role::Student)).await?;

    let mut params = account_params("grace", Role::Student);
    params.email = "other@example.com".to_string();
    let result = repo.create(params).await;

    match result {
        Err(AppError::Conflict(msg)) => assert!(msg.contains("Username")),
        other => panic!("expected Conflict, got {:?}", other.map(|a| a.username)),
    }

    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a duplicate email is rejected.
///
/// Expected: Err(Conflict) naming the email, and no second row
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(account_params("alan", Role::Student)).await?;

    let mut params = account_params("alonzo", Role::Student);
    params.email = "alan@example.com".to_string();
    let result = repo.create(params).await;

    match result {
        Err(AppError::Conflict(msg)) => assert!(msg.contains("Email")),
        other => panic!("expected Conflict, got {:?}", other.map(|a| a.username)),
    }

    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}
