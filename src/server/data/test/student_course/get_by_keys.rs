use super::*;

/// Tests finding the unique row matching both keys.
#[tokio::test]
async fn finds_association_by_composite_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let course = factory::create_course(db).await?;
    factory::create_enrollment(db, student.id_student, course.id_course).await?;

    let record = StudentCourseRepository::new(db)
        .get_by_keys(student.id_student, course.id_course)
        .await?;

    assert!(record.is_some());

    Ok(())
}

/// Tests that a pair with no association yields None.
#[tokio::test]
async fn returns_none_for_missing_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let course = factory::create_course(db).await?;

    let record = StudentCourseRepository::new(db)
        .get_by_keys(student.id_student, course.id_course)
        .await?;

    assert!(record.is_none());

    Ok(())
}
