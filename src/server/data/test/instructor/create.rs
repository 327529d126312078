use super::*;

/// Tests creating an instructor with its backing account.
///
/// Expected: Ok; the profile links to a fresh account with role instructor
#[tokio::test]
async fn creates_instructor_with_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstructorRepository::new(db);
    let instructor = repo.create(instructor_params("emmy")).await?;

    assert_eq!(instructor.specialty, "Mathematics");

    let account = entity::prelude::User::find_by_id(instructor.user_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(account.username, "emmy");
    assert_eq!(account.role, entity::user::Role::Instructor);

    Ok(())
}

/// Tests that a duplicate email is rejected.
///
/// Expected: Err(Conflict) naming the email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstructorRepository::new(db);
    repo.create(instructor_params("kurt")).await?;

    let mut params = instructor_params("kurt2");
    params.email = "kurt@example.com".to_string();
    let result = repo.create(params).await;

    match result {
        Err(AppError::Conflict(msg)) => assert!(msg.contains("Email")),
        other => panic!("expected Conflict, got {:?}", other.map(|i| i.name)),
    }

    Ok(())
}
