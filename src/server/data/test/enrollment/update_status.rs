use super::*;

/// Tests completing an enrollment with a grade through the service.
///
/// Expected: status completed, grade stored
#[tokio::test]
async fn completes_with_grade() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, enrollment) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;

    let service = EnrollmentService::new(db);
    let updated = service
        .update(UpdateEnrollmentParams {
            id: enrollment.id,
            status: Some(EnrollmentStatus::Completed),
            grade: Some("A".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, EnrollmentStatus::Completed);
    assert_eq!(updated.grade, Some("A".to_string()));

    Ok(())
}

/// Tests completing an enrollment without a grade.
///
/// Expected: Err(BadRequest); the stored row is unchanged
#[tokio::test]
async fn rejects_completion_without_grade() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, enrollment) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;

    let service = EnrollmentService::new(db);
    let result = service
        .update(UpdateEnrollmentParams {
            id: enrollment.id,
            status: Some(EnrollmentStatus::Completed),
            grade: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = EnrollmentRepository::new(db).find_by_id(enrollment.id).await?.unwrap();
    assert_eq!(stored.status, EnrollmentStatus::Enrolled);

    Ok(())
}

/// Tests dropping an enrollment.
///
/// Expected: status dropped; a grade sent alongside is discarded
#[tokio::test]
async fn drops_and_clears_grade() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, enrollment) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;

    let service = EnrollmentService::new(db);
    let updated = service
        .update(UpdateEnrollmentParams {
            id: enrollment.id,
            status: Some(EnrollmentStatus::Dropped),
            grade: Some("B".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.status, EnrollmentStatus::Dropped);
    assert_eq!(updated.grade, None);

    Ok(())
}

/// Tests that terminal states refuse further transitions.
///
/// Expected: Err(BadRequest) for any change after completed or dropped
#[tokio::test]
async fn terminal_states_are_final() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;

    let service = EnrollmentService::new(db);
    service
        .update(UpdateEnrollmentParams {
            id: enrollment.id,
            status: Some(EnrollmentStatus::Dropped),
            grade: None,
        })
        .await?;

    let result = service
        .update(UpdateEnrollmentParams {
            id: enrollment.id,
            status: Some(EnrollmentStatus::Enrolled),
            grade: None,
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // Same for completed: complete a second enrollment, then try to drop it.
    let second = EnrollmentRepository::new(db)
        .create(enrollment_params(student.id, course.id, "2027-Spring"))
        .await?;
    service
        .update(UpdateEnrollmentParams {
            id: second.id,
            status: Some(EnrollmentStatus::Completed),
            grade: Some("A".to_string()),
        })
        .await?;

    let result = service
        .update(UpdateEnrollmentParams {
            id: second.id,
            status: Some(EnrollmentStatus::Dropped),
            grade: None,
        })
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests setting a grade without completing.
///
/// Expected: Err(BadRequest) while enrolled
#[tokio::test]
async fn rejects_grade_while_enrolled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, enrollment) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;

    let service = EnrollmentService::new(db);
    let result = service
        .update(UpdateEnrollmentParams {
            id: enrollment.id,
            status: None,
            grade: Some("A".to_string()),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating a missing enrollment.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = EnrollmentService::new(db);
    let result = service
        .update(UpdateEnrollmentParams {
            id: 4242,
            status: Some(EnrollmentStatus::Dropped),
            grade: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
