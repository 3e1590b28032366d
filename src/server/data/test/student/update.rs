use super::*;

/// Tests applying scalar field updates.
#[tokio::test]
async fn updates_scalar_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let mut param = empty_update();
    param.name = Some("Grace".to_string());
    param.lastname = Some("Hopper".to_string());

    let repo = StudentRepository::new(db);
    repo.update(student.clone(), param).await?;

    let stored = repo.get_by_id(student.id_student).await?.unwrap();
    assert_eq!(stored.name, "Grace");
    assert_eq!(stored.lastname, Some("Hopper".to_string()));
    assert_eq!(stored.email, student.email);

    Ok(())
}

/// Tests that a location payload updates the existing location row.
#[tokio::test]
async fn updates_existing_location() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let location = factory::create_location(db, student.id_student).await?;

    let mut param = empty_update();
    param.location = Some(UpdateLocationParam {
        postal_code: None,
        country: None,
        street: Some("New Street".to_string()),
        district: None,
        number: Some(7),
        complement: None,
        city: None,
        state: None,
    });

    StudentRepository::new(db).update(student.clone(), param).await?;

    let stored = entity::prelude::Location::find_by_id(location.id_location)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.street, Some("New Street".to_string()));
    assert_eq!(stored.number, 7);
    assert_eq!(stored.postal_code, location.postal_code);

    // Still exactly one location for the student
    let count = entity::prelude::Location::find()
        .filter(entity::location::Column::StudentFk.eq(student.id_student))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that a location payload creates a location when the student has none.
#[tokio::test]
async fn creates_location_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let mut param = empty_update();
    param.location = Some(UpdateLocationParam {
        postal_code: Some("02000-000".to_string()),
        country: Some("Brazil".to_string()),
        street: None,
        district: None,
        number: Some(10),
        complement: None,
        city: None,
        state: None,
    });

    StudentRepository::new(db).update(student.clone(), param).await?;

    let stored = entity::prelude::Location::find()
        .filter(entity::location::Column::StudentFk.eq(student.id_student))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.postal_code, "02000-000");
    assert_eq!(stored.number, 10);

    Ok(())
}

/// Tests that creating a location from a payload missing required columns fails.
#[tokio::test]
async fn rejects_location_creation_without_required_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let mut param = empty_update();
    param.location = Some(UpdateLocationParam {
        postal_code: None,
        country: None,
        street: Some("Somewhere".to_string()),
        district: None,
        number: None,
        complement: None,
        city: None,
        state: None,
    });

    let result = StudentRepository::new(db).update(student, param).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that a non-empty courses list replaces all prior enrollments.
///
/// Expected: exactly the new set afterwards, not a union of old and new
#[tokio::test]
async fn replaces_all_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let algebra = factory::create_course_with_name(db, "Algebra").await?;
    let geometry = factory::create_course_with_name(db, "Geometry").await?;
    let logic = factory::create_course_with_name(db, "Logic").await?;
    factory::create_enrollment(db, student.id_student, algebra.id_course).await?;
    factory::create_enrollment(db, student.id_student, geometry.id_course).await?;

    let mut param = empty_update();
    param.courses = Some(vec![EnrollmentParam {
        course_id: logic.id_course,
        conclusion_date: NaiveDate::from_ymd_opt(2027, 1, 15),
    }]);

    let repo = StudentRepository::new(db);
    repo.update(student.clone(), param).await?;

    let updated = repo
        .get_by_id_with_relations(student.id_student)
        .await?
        .unwrap();
    assert_eq!(updated.courses.len(), 1);
    assert_eq!(updated.courses[0].id_course, logic.id_course);
    assert_eq!(
        updated.courses[0].conclusion_date,
        NaiveDate::from_ymd_opt(2027, 1, 15)
    );

    Ok(())
}

/// Tests that unknown course ids are skipped while replacing enrollments.
#[tokio::test]
async fn skips_unknown_course_ids_while_replacing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let algebra = factory::create_course_with_name(db, "Algebra").await?;
    let logic = factory::create_course_with_name(db, "Logic").await?;
    factory::create_enrollment(db, student.id_student, algebra.id_course).await?;

    let mut param = empty_update();
    param.courses = Some(vec![
        EnrollmentParam {
            course_id: logic.id_course,
            conclusion_date: None,
        },
        EnrollmentParam {
            course_id: 9999,
            conclusion_date: None,
        },
    ]);

    let repo = StudentRepository::new(db);
    repo.update(student.clone(), param).await?;

    let updated = repo
        .get_by_id_with_relations(student.id_student)
        .await?
        .unwrap();
    assert_eq!(updated.courses.len(), 1);
    assert_eq!(updated.courses[0].id_course, logic.id_course);

    Ok(())
}

/// Tests that an empty courses list leaves existing enrollments untouched.
#[tokio::test]
async fn keeps_enrollments_for_empty_courses_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let algebra = factory::create_course_with_name(db, "Algebra").await?;
    factory::create_enrollment(db, student.id_student, algebra.id_course).await?;

    let mut param = empty_update();
    param.courses = Some(Vec::new());

    let repo = StudentRepository::new(db);
    repo.update(student.clone(), param).await?;

    let updated = repo
        .get_by_id_with_relations(student.id_student)
        .await?
        .unwrap();
    assert_eq!(updated.courses.len(), 1);

    Ok(())
}
