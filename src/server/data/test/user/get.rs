use super::*;

/// Tests looking up an account by id and by email.
///
/// Expected: both lookups return the created account
#[tokio::test]
async fn finds_by_id_and_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(account_params("barbara", Role::Instructor)).await?;

    let by_id = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(by_id, created);

    let by_email = repo.find_by_email("barbara@example.com").await?.unwrap();
    assert_eq!(by_email.id, created.id);

    assert!(repo.find_by_id(created.id + 100).await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}

/// Tests that the round trip preserves field values.
///
/// Expected: get-by-id returns identical fields to the create result
#[tokio::test]
async fn round_trip_preserves_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(account_params("edsger", Role::Admin)).await?;
    let fetched = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(fetched.username, created.username);
    assert_eq!(fetched.email, created.email);
    assert_eq!(fetched.password_hash, created.password_hash);
    assert_eq!(fetched.role, created.role);
    assert_eq!(fetched.created_at, created.created_at);

    Ok(())
}

/// Tests listing all accounts.
///
/// Expected: every created account appears, ordered by id
#[tokio::test]
async fn lists_all_accounts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(account_params("u1", Role::Student)).await?;
    repo.create(account_params("u2", Role::Instructor)).await?;
    repo.create(account_params("u3", Role::Admin)).await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

    Ok(())
}
