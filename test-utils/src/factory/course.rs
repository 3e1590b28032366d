//! Course factory for creating test course entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a course with a generated unique name.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    create_course_with_name(db, format!("Course {}", next_id())).await
}

/// Creates a course with the given name.
pub async fn create_course_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::course::Model, DbErr> {
    entity::course::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
