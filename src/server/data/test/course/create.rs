use super::*;

/// Tests creating a course for an existing instructor.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn creates_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, entity::user::Role::Instructor).await?;
    let instructor = factory::instructor::create_instructor(db, user.id).await?;

    let repo = CourseRepository::new(db);
    let course = repo.create(course_params("CS101", instructor.id)).await?;

    assert_eq!(course.course_code, "CS101");
    assert_eq!(course.instructor_id, instructor.id);
    assert_eq!(course.max_capacity, 30);

    Ok(())
}

/// Tests creating a course for a missing instructor.
///
/// Expected: Err(NotFound) naming the instructor
#[tokio::test]
async fn rejects_missing_instructor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    let result = repo.create(course_params("CS102", 4242)).await;

    match result {
        Err(AppError::NotFound(msg)) => assert!(msg.contains("Instructor")),
        other => panic!("expected NotFound, got {:?}", other.map(|c| c.course_code)),
    }

    Ok(())
}

/// Tests that a duplicate course code is rejected.
///
/// Expected: Err(Conflict) naming the course code
#[tokio::test]
async fn rejects_duplicate_course_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, entity::user::Role::Instructor).await?;
    let instructor = factory::instructor::create_instructor(db, user.id).await?;

    let repo = CourseRepository::new(db);
    repo.create(course_params("CS103", instructor.id)).await?;

    let result = repo.create(course_params("CS103", instructor.id)).await;
    match result {
        Err(AppError::Conflict(msg)) => assert!(msg.contains("Course code")),
        other => panic!("expected Conflict, got {:?}", other.map(|c| c.course_code)),
    }

    Ok(())
}

/// Tests listing an instructor's courses.
///
/// Expected: only that instructor's courses are returned
#[tokio::test]
async fn lists_courses_by_instructor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, own_instructor, own_course) =
        test_utils::factory::helpers::create_course_with_instructor(db).await?;
    let (_, _, _other_course) =
        test_utils::factory::helpers::create_course_with_instructor(db).await?;

    let repo = CourseRepository::new(db);
    let courses = repo.get_by_instructor_id(own_instructor.id).await?;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, own_course.id);

    Ok(())
}
