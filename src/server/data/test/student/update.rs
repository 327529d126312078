use super::*;

/// Tests patching a subset of profile fields.
///
/// Expected: provided fields change, absent fields stay untouched
#[tokio::test]
async fn patches_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let created = repo.create(student_params("mary", "STU-400")).await?;

    let updated = repo
        .update(UpdateStudentParams {
            id: created.id,
            name: Some("Mary Jackson".to_string()),
            age: None,
            student_code: None,
            enrollment_year: Some(2027),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Mary Jackson");
    assert_eq!(updated.age, created.age);
    assert_eq!(updated.student_code, created.student_code);
    assert_eq!(updated.enrollment_year, 2027);
    assert_eq!(updated.user_id, created.user_id);

    Ok(())
}

/// Tests renaming to a student code another profile already holds.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_student_code_collision() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    repo.create(student_params("one", "STU-500")).await?;
    let second = repo.create(student_params("two", "STU-501")).await?;

    let result = repo
        .update(UpdateStudentParams {
            id: second.id,
            name: None,
            age: None,
            student_code: Some("STU-500".to_string()),
            enrollment_year: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a missing profile.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo
        .update(UpdateStudentParams {
            id: 4242,
            name: Some("Ghost".to_string()),
            age: None,
            student_code: None,
            enrollment_year: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
