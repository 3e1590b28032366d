use super::*;

/// Tests repointing the composite key to a different course.
#[tokio::test]
async fn repoints_composite_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let algebra = factory::create_course(db).await?;
    let geometry = factory::create_course(db).await?;
    let existing = factory::create_enrollment(db, student.id_student, algebra.id_course).await?;

    let repo = StudentCourseRepository::new(db);
    let updated = repo
        .update(existing, student.id_student, geometry.id_course, None)
        .await?;

    assert_eq!(updated.course_id, geometry.id_course);
    assert!(repo
        .get_by_keys(student.id_student, algebra.id_course)
        .await?
        .is_none());

    Ok(())
}

/// Tests that an absent conclusion date keeps the stored value.
#[tokio::test]
async fn keeps_conclusion_date_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let course = factory::create_course(db).await?;
    let date = NaiveDate::from_ymd_opt(2026, 11, 30).unwrap();
    let existing =
        factory::create_enrollment_with_date(db, student.id_student, course.id_course, date)
            .await?;

    let updated = StudentCourseRepository::new(db)
        .update(existing, student.id_student, course.id_course, None)
        .await?;

    assert_eq!(updated.conclusion_date, Some(date));

    Ok(())
}

/// Tests that a provided conclusion date replaces the stored value.
#[tokio::test]
async fn sets_conclusion_date_when_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let course = factory::create_course(db).await?;
    let existing = factory::create_enrollment(db, student.id_student, course.id_course).await?;

    let date = NaiveDate::from_ymd_opt(2027, 3, 1).unwrap();
    let updated = StudentCourseRepository::new(db)
        .update(existing, student.id_student, course.id_course, Some(date))
        .await?;

    assert_eq!(updated.conclusion_date, Some(date));

    Ok(())
}

/// Tests that repointing onto an already existing pair is rejected.
#[tokio::test]
async fn rejects_repoint_onto_existing_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let algebra = factory::create_course(db).await?;
    let geometry = factory::create_course(db).await?;
    let existing = factory::create_enrollment(db, student.id_student, algebra.id_course).await?;
    factory::create_enrollment(db, student.id_student, geometry.id_course).await?;

    let result = StudentCourseRepository::new(db)
        .update(existing, student.id_student, geometry.id_course, None)
        .await;

    assert!(result.is_err());

    Ok(())
}
