use super::*;

/// Tests deleting an instructor with courses and enrollments.
///
/// Expected: profile, courses and enrollments gone; the account survives
#[tokio::test]
async fn deletes_profile_courses_and_enrollments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, instructor, course) =
        test_utils::factory::helpers::create_course_with_instructor(db).await?;
    let second_course = factory::course::create_course(db, instructor.id).await?;
    let (_, student) = test_utils::factory::helpers::create_student_with_account(db).await?;
    let enrollment = factory::enrollment::create_enrollment(db, student.id, course.id).await?;

    let repo = InstructorRepository::new(db);
    assert!(repo.delete(instructor.id).await?);

    assert!(entity::prelude::Instructor::find_by_id(instructor.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Course::find_by_id(course.id).one(db).await?.is_none());
    assert!(entity::prelude::Course::find_by_id(second_course.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Enrollment::find_by_id(enrollment.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_some());

    Ok(())
}

/// Tests deleting a missing profile.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_instructor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InstructorRepository::new(db);
    assert!(!repo.delete(4242).await?);

    Ok(())
}
