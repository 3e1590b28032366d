use super::*;

/// Tests updating a course's name.
#[tokio::test]
async fn updates_course_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Course).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course_with_name(db, "Chemistry").await?;

    let updated = CourseRepository::new(db)
        .update(course.id_course, Some("Organic Chemistry".to_string()))
        .await?;

    assert_eq!(
        updated.map(|c| c.name),
        Some("Organic Chemistry".to_string())
    );

    let stored = Course::find_by_id(course.id_course).one(db).await?.unwrap();
    assert_eq!(stored.name, "Organic Chemistry");

    Ok(())
}

/// Tests that an update without fields is a no-op returning the current row.
#[tokio::test]
async fn keeps_course_unchanged_without_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Course).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course_with_name(db, "Biology").await?;

    let updated = CourseRepository::new(db).update(course.id_course, None).await?;

    assert_eq!(updated, Some(course));

    Ok(())
}

/// Tests that updating a missing course yields None.
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Course).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = CourseRepository::new(db)
        .update(999, Some("Nope".to_string()))
        .await?;

    assert!(updated.is_none());

    Ok(())
}
