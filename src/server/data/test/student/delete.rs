use super::*;

/// Tests deleting a student profile with enrollments.
///
/// Expected: profile and enrollments gone; the backing account survives
#[tokio::test]
async fn deletes_profile_and_enrollments_keeps_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, student) = test_utils::factory::helpers::create_student_with_account(db).await?;
    let (_, _, course) = test_utils::factory::helpers::create_course_with_instructor(db).await?;
    let enrollment = factory::enrollment::create_enrollment(db, student.id, course.id).await?;

    let repo = StudentRepository::new(db);
    assert!(repo.delete(student.id).await?);

    assert!(entity::prelude::Student::find_by_id(student.id).one(db).await?.is_none());
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
async fn returns_false_for_missing_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    assert!(!repo.delete(4242).await?);

    Ok(())
}
