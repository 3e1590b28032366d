//! Factory for creating test student-course association rows.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Creates an association row without a conclusion date.
pub async fn create_enrollment(
    db: &DatabaseConnection,
    student_id: i32,
    course_id: i32,
) -> Result<entity::student_course::Model, DbErr> {
    entity::prelude::StudentCourse::insert(entity::student_course::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        course_id: ActiveValue::Set(course_id),
        conclusion_date: ActiveValue::Set(None),
    })
    .exec_with_returning(db)
    .await
}

/// Creates an association row with the given conclusion date.
pub async fn create_enrollment_with_date(
    db: &DatabaseConnection,
    student_id: i32,
    course_id: i32,
    conclusion_date: NaiveDate,
) -> Result<entity::student_course::Model, DbErr> {
    entity::prelude::StudentCourse::insert(entity::student_course::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        course_id: ActiveValue::Set(course_id),
        conclusion_date: ActiveValue::Set(Some(conclusion_date)),
    })
    .exec_with_returning(db)
    .await
}
