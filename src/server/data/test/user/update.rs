use super::*;

/// Tests patching a subset of account fields.
///
/// Expected: provided fields change, absent fields stay untouched
#[tokio::test]
async fn patches_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(account_params("donald", Role::Student)).await?;

    let updated = repo
        .update(UpdateAccountParams {
            id: created.id,
            username: Some("don".to_string()),
            email: None,
            password_hash: None,
            role: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, "don");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password_hash, created.password_hash);
    assert_eq!(updated.role, created.role);

    Ok(())
}

/// Tests a role change through the privileged update path.
///
/// Expected: the stored role changes
#[tokio::test]
async fn updates_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(account_params("lin", Role::Student)).await?;

    let updated = repo
        .update(UpdateAccountParams {
            id: created.id,
            username: None,
            email: None,
            password_hash: None,
            role: Some(Role::Instructor),
        })
        .await?
        .unwrap();

    assert_eq!(updated.role, Role::Instructor);

    Ok(())
}

/// Tests renaming to a username another account already holds.
///
/// Expected: Err(Conflict); the original username survives
#[tokio::test]
async fn rejects_username_collision_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(account_params("first", Role::Student)).await?;
    let second = repo.create(account_params("second", Role::Student)).await?;

    let result = repo
        .update(UpdateAccountParams {
            id: second.id,
            username: Some("first".to_string()),
            email: None,
            password_hash: None,
            role: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    let unchanged = repo.find_by_id(second.id).await?.unwrap();
    assert_eq!(unchanged.username, "second");

    Ok(())
}

/// Tests keeping the same username while patching another field.
///
/// Expected: Ok; the self-collision is not a conflict
#[tokio::test]
async fn allows_keeping_own_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(account_params("same", Role::Student)).await?;

    let updated = repo
        .update(UpdateAccountParams {
            id: created.id,
            username: Some("same".to_string()),
            email: Some("new@example.com".to_string()),
            password_hash: None,
            role: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.username, "same");
    assert_eq!(updated.email, "new@example.com");

    Ok(())
}

/// Tests updating a missing account.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateAccountParams {
            id: 4242,
            username: Some("ghost".to_string()),
            email: None,
            password_hash: None,
            role: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
