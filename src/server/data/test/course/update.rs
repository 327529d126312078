use super::*;

/// Tests patching a subset of course fields.
///
/// Expected: provided fields change, absent fields and ownership stay untouched
#[tokio::test]
async fn patches_only_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, instructor, course) =
        test_utils::factory::helpers::create_course_with_instructor(db).await?;

    let repo = CourseRepository::new(db);
    let updated = repo
        .update(UpdateCourseParams {
            id: course.id,
            title: Some("Advanced Databases".to_string()),
            course_code: None,
            description: None,
            credit_hours: None,
            max_capacity: Some(12),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Advanced Databases");
    assert_eq!(updated.course_code, course.course_code);
    assert_eq!(updated.max_capacity, 12);
    assert_eq!(updated.instructor_id, instructor.id);

    Ok(())
}

/// Tests renaming to a course code another course already holds.
///
/// Expected: Err(Conflict)
#[tokio::test]
async fn rejects_course_code_collision() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, entity::user::Role::Instructor).await?;
    let instructor = factory::instructor::create_instructor(db, user.id).await?;

    let repo = CourseRepository::new(db);
    repo.create(course_params("CS201", instructor.id)).await?;
    let second = repo.create(course_params("CS202", instructor.id)).await?;

    let result = repo
        .update(UpdateCourseParams {
            id: second.id,
            title: None,
            course_code: Some("CS201".to_string()),
            description: None,
            credit_hours: None,
            max_capacity: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests updating a missing course.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let result = repo
        .update(UpdateCourseParams {
            id: 4242,
            title: Some("Ghost".to_string()),
            course_code: None,
            description: None,
            credit_hours: None,
            max_capacity: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
