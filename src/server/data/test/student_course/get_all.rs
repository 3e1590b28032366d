use super::*;

/// Tests that all association rows are returned without expansion.
#[tokio::test]
async fn returns_all_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let algebra = factory::create_course(db).await?;
    let geometry = factory::create_course(db).await?;
    factory::create_enrollment(db, student.id_student, algebra.id_course).await?;
    factory::create_enrollment(db, student.id_student, geometry.id_course).await?;

    let records = StudentCourseRepository::new(db).get_all().await?;

    assert_eq!(records.len(), 2);

    Ok(())
}

/// Tests that an empty table yields an empty list.
#[tokio::test]
async fn returns_empty_list_without_associations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let records = StudentCourseRepository::new(db).get_all().await?;

    assert!(records.is_empty());

    Ok(())
}
