use super::*;

/// Tests loading a student with its location and enrolled courses.
#[tokio::test]
async fn loads_student_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    factory::create_location(db, student.id_student).await?;
    let course = factory::create_course_with_name(db, "Physics").await?;
    factory::create_enrollment_with_date(
        db,
        student.id_student,
        course.id_course,
        NaiveDate::from_ymd_opt(2027, 6, 30).unwrap(),
    )
    .await?;

    let loaded = StudentRepository::new(db)
        .get_by_id_with_relations(student.id_student)
        .await?
        .unwrap();

    assert_eq!(loaded.id_student, student.id_student);
    assert_eq!(loaded.email, student.email);
    assert!(loaded.location.is_some());
    assert_eq!(loaded.courses.len(), 1);
    assert_eq!(loaded.courses[0].name, "Physics");
    assert_eq!(
        loaded.courses[0].conclusion_date,
        NaiveDate::from_ymd_opt(2027, 6, 30)
    );

    Ok(())
}

/// Tests that a student without relations still loads.
#[tokio::test]
async fn loads_student_without_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let loaded = StudentRepository::new(db)
        .get_by_id_with_relations(student.id_student)
        .await?
        .unwrap();

    assert!(loaded.location.is_none());
    assert!(loaded.courses.is_empty());

    Ok(())
}

/// Tests that a missing id yields None.
#[tokio::test]
async fn returns_none_for_missing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let loaded = StudentRepository::new(db).get_by_id_with_relations(999).await?;

    assert!(loaded.is_none());

    Ok(())
}
