use super::*;

/// Tests that an empty table yields an empty list.
#[tokio::test]
async fn returns_empty_list_without_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Course).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let courses = CourseRepository::new(db).get_all().await?;

    assert!(courses.is_empty());

    Ok(())
}

/// Tests that all courses are returned ordered by id.
#[tokio::test]
async fn returns_all_courses_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Course).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_course_with_name(db, "Algebra").await?;
    let second = factory::create_course_with_name(db, "Geometry").await?;

    let courses = CourseRepository::new(db).get_all().await?;

    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].id_course, first.id_course);
    assert_eq!(courses[1].id_course, second.id_course);

    Ok(())
}
