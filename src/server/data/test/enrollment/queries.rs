use super::*;

/// Tests the per-student and per-course projections.
///
/// Expected: each query returns exactly the rows belonging to its argument
#[tokio::test]
async fn filters_by_student_and_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (student_a, course_a, enrollment_a) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;
    let (student_b, course_b, enrollment_b) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = EnrollmentRepository::new(db);

    let for_a = repo.get_by_student_id(student_a.id).await?;
    assert_eq!(for_a.len(), 1);
    assert_eq!(for_a[0].id, enrollment_a.id);

    let for_b = repo.get_by_student_id(student_b.id).await?;
    assert_eq!(for_b.len(), 1);
    assert_eq!(for_b[0].id, enrollment_b.id);

    let roster_a = repo.get_by_course_id(course_a.id).await?;
    assert_eq!(roster_a.len(), 1);
    assert_eq!(roster_a[0].id, enrollment_a.id);

    let roster_b = repo.get_by_course_id(course_b.id).await?;
    assert_eq!(roster_b.len(), 1);
    assert_eq!(roster_b[0].id, enrollment_b.id);

    Ok(())
}

/// Tests the per-instructor projection across that instructor's courses.
///
/// Expected: enrollments of both owned courses, nothing from other instructors
#[tokio::test]
async fn filters_by_instructor() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, instructor, first_course) =
        test_utils::factory::helpers::create_course_with_instructor(db).await?;
    let second_course = factory::course::create_course(db, instructor.id).await?;

    let (_, student) = test_utils::factory::helpers::create_student_with_account(db).await?;
    let repo = EnrollmentRepository::new(db);
    let e1 = repo
        .create(enrollment_params(student.id, first_course.id, "2026-Fall"))
        .await?;
    let e2 = repo
        .create(enrollment_params(student.id, second_course.id, "2026-Fall"))
        .await?;

    // Unrelated instructor with their own enrolled student
    let (_, _, other_enrollment) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;

    let mine = repo.get_by_instructor_id(instructor.id).await?;
    let ids: Vec<i32> = mine.iter().map(|enrollment| enrollment.id).collect();

    assert_eq!(ids, vec![e1.id, e2.id]);
    assert!(!ids.contains(&other_enrollment.id));

    Ok(())
}

/// Tests the projection for an instructor without courses.
///
/// Expected: empty list
#[tokio::test]
async fn empty_for_instructor_without_courses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user_with_role(db, entity::user::Role::Instructor).await?;
    let instructor = factory::instructor::create_instructor(db, user.id).await?;

    let repo = EnrollmentRepository::new(db);
    assert!(repo.get_by_instructor_id(instructor.id).await?.is_empty());

    Ok(())
}
