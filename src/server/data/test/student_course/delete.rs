use super::*;

/// Tests deleting an existing association.
#[tokio::test]
async fn deletes_existing_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let course = factory::create_course(db).await?;
    factory::create_enrollment(db, student.id_student, course.id_course).await?;

    let repo = StudentCourseRepository::new(db);
    let deleted = repo.delete(student.id_student, course.id_course).await?;

    assert!(deleted);
    assert!(repo
        .get_by_keys(student.id_student, course.id_course)
        .await?
        .is_none());

    Ok(())
}

/// Tests that deleting a missing pair reports no removed row, never an error.
#[tokio::test]
async fn reports_missing_pair_on_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = StudentCourseRepository::new(db).delete(999, 999).await?;

    assert!(!deleted);

    Ok(())
}
