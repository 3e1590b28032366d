use super::*;

/// Tests finding an existing course by id.
#[tokio::test]
async fn finds_existing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Course).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course_with_name(db, "Physics").await?;

    let found = CourseRepository::new(db).get_by_id(course.id_course).await?;

    assert_eq!(found, Some(course));

    Ok(())
}

/// Tests that a missing id yields None rather than an error.
#[tokio::test]
async fn returns_none_for_missing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Course).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = CourseRepository::new(db).get_by_id(999).await?;

    assert!(found.is_none());

    Ok(())
}
