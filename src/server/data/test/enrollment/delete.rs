use super::*;

/// Tests deleting an enrollment.
///
/// Expected: Ok(true); the row is gone, a second delete reports false
#[tokio::test]
async fn deletes_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_enrollment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, enrollment) =
        test_utils::factory::helpers::create_enrollment_with_dependencies(db).await?;

    let repo = EnrollmentRepository::new(db);
    assert!(repo.delete(enrollment.id).await?);
    assert!(entity::prelude::Enrollment::find_by_id(enrollment.id)
        .one(db)
        .await?
        .is_none());
    assert!(!repo.delete(enrollment.id).await?);

    Ok(())
}
