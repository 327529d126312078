use super::*;

/// Tests creating an enrollment.
///
/// Expected: Ok; status starts as enrolled with no grade
#[tokio::test]
async fn creates_enrollment_in_enrolled_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = test_utils::factory::helpers::create_student_with_account(db).await?;
    let (_, _, course) = test_utils::factory::helpers::create_course_with_instructor(db).await?;

    let repo = EnrollmentRepository::new(db);
    let enrollment = repo
        .create(enrollment_params(student.id, course.id, "2026-Fall"))
        .await?;

    assert_eq!(enrollment.student_id, student.id);
    assert_eq!(enrollment.course_id, course.id);
    assert_eq!(enrollment.semester, "2026-Fall");
    assert_eq!(enrollment.status, EnrollmentStatus::Enrolled);
    assert_eq!(enrollment.grade, None);

    Ok(())
}

/// Tests the (student, course, semester) uniqueness rule.
///
/// Expected: second creation for the same triple fails with Conflict;
/// a different semester for the same pair succeeds
#[tokio::test]
async fn rejects_duplicate_triple_but_allows_other_semester() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = test_utils::factory::helpers::create_student_with_account(db).await?;
    let (_, _, course) = test_utils::factory::helpers::create_course_with_instructor(db).await?;

    let repo = EnrollmentRepository::new(db);
    repo.create(enrollment_params(student.id, course.id, "2026-Fall")).await?;

    let duplicate = repo
        .create(enrollment_params(student.id, course.id, "2026-Fall"))
        .await;
    match duplicate {
        Err(AppError::Conflict(msg)) => assert!(msg.contains("already enrolled")),
        other => panic!("expected Conflict, got {:?}", other.map(|e| e.id)),
    }

    // Same student and course, next semester: a new triple.
    repo.create(enrollment_params(student.id, course.id, "2027-Spring")).await?;

    Ok(())
}

/// Tests the capacity rule.
///
/// Expected: a course with max_capacity 2 accepts two enrollments and
/// rejects the third with Conflict
#[tokio::test]
async fn rejects_enrollment_beyond_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, instructor, _) =
        test_utils::factory::helpers::create_course_with_instructor(db).await?;
    let course = factory::course::CourseFactory::new(db, instructor.id)
        .max_capacity(2)
        .build()
        .await?;

    let repo = EnrollmentRepository::new(db);
    for _ in 0..2 {
        let (_, student) = test_utils::factory::helpers::create_student_with_account(db).await?;
        repo.create(enrollment_params(student.id, course.id, "2026-Fall")).await?;
    }

    let (_, third) = test_utils::factory::helpers::create_student_with_account(db).await?;
    let result = repo
        .create(enrollment_params(third.id, course.id, "2026-Fall"))
        .await;

    match result {
        Err(AppError::Conflict(msg)) => assert!(msg.contains("capacity")),
        other => panic!("expected Conflict, got {:?}", other.map(|e| e.id)),
    }

    Ok(())
}

/// Tests that dropped enrollments free their seat.
///
/// Expected: after a drop, a course at max_capacity 1 accepts a new student
#[tokio::test]
async fn dropped_enrollments_do_not_count_toward_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, instructor, _) =
        test_utils::factory::helpers::create_course_with_instructor(db).await?;
    let course = factory::course::CourseFactory::new(db, instructor.id)
        .max_capacity(1)
        .build()
        .await?;

    let repo = EnrollmentRepository::new(db);

    let (_, first) = test_utils::factory::helpers::create_student_with_account(db).await?;
    let enrollment = repo
        .create(enrollment_params(first.id, course.id, "2026-Fall"))
        .await?;

    repo.set_status(enrollment.id, EnrollmentStatus::Dropped, None).await?;

    let (_, second) = test_utils::factory::helpers::create_student_with_account(db).await?;
    repo.create(enrollment_params(second.id, course.id, "2026-Fall")).await?;

    Ok(())
}

/// Tests creating an enrollment against missing references.
///
/// Expected: Err(NotFound) naming the missing entity; nothing inserted
#[tokio::test]
async fn rejects_missing_student_or_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = test_utils::factory::helpers::create_student_with_account(db).await?;
    let (_, _, course) = test_utils::factory::helpers::create_course_with_instructor(db).await?;

    let repo = EnrollmentRepository::new(db);

    let result = repo.create(enrollment_params(4242, course.id, "2026-Fall")).await;
    match result {
        Err(AppError::NotFound(msg)) => assert!(msg.contains("Student")),
        other => panic!("expected NotFound, got {:?}", other.map(|e| e.id)),
    }

    let result = repo.create(enrollment_params(student.id, 4242, "2026-Fall")).await;
    match result {
        Err(AppError::NotFound(msg)) => assert!(msg.contains("Course")),
        other => panic!("expected NotFound, got {:?}", other.map(|e| e.id)),
    }

    assert!(entity::prelude::Enrollment::find().one(db).await?.is_none());

    Ok(())
}
