use super::*;

/// Tests deleting a course with enrollments.
///
/// Expected: course and enrollments gone; student and instructor survive
#[tokio::test]
async fn deletes_course_and_enrollments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student, course, enrollment) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = CourseRepository::new(db);
    assert!(repo.delete(course.id).await?);

    assert!(entity::prelude::Course::find_by_id(course.id).one(db).await?.is_none());
    assert!(entity::prelude::Enrollment::find_by_id(enrollment.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Student::find_by_id(student.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a missing course.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);
    assert!(!repo.delete(4242).await?);

    Ok(())
}
