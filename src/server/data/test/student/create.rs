use super::*;

/// Tests creating a student with its backing account.
///
/// Expected: Ok; the profile links to a fresh account with role student
#[tokio::test]
async fn creates_student_with_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.create(student_params("ada", "STU-100")).await?;

    assert_eq!(student.student_code, "STU-100");

    let account = entity::prelude::User::find_by_id(student.user_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(account.username, "ada");
    assert_eq!(account.role, entity::user::Role::Student);

    Ok(())
}

/// Tests that a duplicate student code is rejected without a partial account.
///
/// Expected: Err(Conflict); the account row count does not grow
#[tokio::test]
async fn rejects_duplicate_student_code_without_partial_write() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create(student_params("first", "STU-200")).await?;

    let accounts_before = entity::prelude::User::find().count(db).await?;

    let result = repo.create(student_params("second", "STU-200")).await;
    match result {
        Err(AppError::Conflict(msg)) => assert!(msg.contains("Student code")),
        other => panic!("expected Conflict, got {:?}", other.map(|s| s.student_code)),
    }

    // Nothing from the failed creation survives, account included.
    assert_eq!(entity::prelude::User::find().count(db).await?, accounts_before);
    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a duplicate username is rejected when creating the linked account.
///
/// Expected: Err(Conflict) naming the username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create(student_params("taken", "STU-300")).await?;

    let result = repo.create(student_params("taken", "STU-301")).await;
    match result {
        Err(AppError::Conflict(msg)) => assert!(msg.contains("Username")),
        other => panic!("expected Conflict, got {:?}", other.map(|s| s.student_code)),
    }

    Ok(())
}
