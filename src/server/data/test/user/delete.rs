use super::*;

/// Tests deleting a bare account.
///
/// Expected: Ok(true); the row is gone, a second delete reports false
#[tokio::test]
async fn deletes_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_profile_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(account_params("temp", Role::Student)).await?;

    assert!(repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());
    assert!(!repo.delete(created.id).await?);

    Ok(())
}

/// Tests that deleting a student account removes the profile and enrollments.
///
/// Expected: account, profile and enrollment rows all gone
#[tokio::test]
async fn cascades_to_student_profile_and_enrollments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let student = factory::student::create_student(db, user.id).await?;
    let (_, _, course) = test_utils::factory::helpers::create_course_with_instructor(db).await?;
    let enrollment = factory::enrollment::create_enrollment(db, student.id, course.id).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);

    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_none());
    assert!(entity::prelude::Student::find_by_id(student.id).one(db).await?.is_none());
    assert!(entity::prelude::Enrollment::find_by_id(enrollment.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests that deleting an instructor account removes courses and their enrollments.
///
/// Expected: account, profile, course and enrollment rows all gone
#[tokio::test]
async fn cascades_to_instructor_courses_and_enrollments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, instructor, course) =
        test_utils::factory::helpers::create_course_with_instructor(db).await?;
    let (_, student) = test_utils::factory::helpers::create_student_with_account(db).await?;
    let enrollment = factory::enrollment::create_enrollment(db, student.id, course.id).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);

    assert!(entity::prelude::Instructor::find_by_id(instructor.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Course::find_by_id(course.id).one(db).await?.is_none());
    assert!(entity::prelude::Enrollment::find_by_id(enrollment.id)
        .one(db)
        .await?
        .is_none());

    // The student side is untouched
    assert!(entity::prelude::Student::find_by_id(student.id).one(db).await?.is_some());

    Ok(())
}
