use super::*;

/// Tests deleting an existing course.
#[tokio::test]
async fn deletes_existing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Course).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course_with_name(db, "History").await?;

    let deleted = CourseRepository::new(db).delete(course.id_course).await?;

    assert!(deleted);
    assert_eq!(Course::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting a missing course reports no removed row, never an error.
#[tokio::test]
async fn reports_missing_course_on_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Course).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CourseRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
