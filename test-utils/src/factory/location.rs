//! Location factory for creating test location entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a location bound to the given student with default address fields.
pub async fn create_location(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::location::Model, DbErr> {
    entity::location::ActiveModel {
        postal_code: ActiveValue::Set("01000-000".to_string()),
        country: ActiveValue::Set("Brazil".to_string()),
        street: ActiveValue::Set(Some("Main Street".to_string())),
        district: ActiveValue::Set(None),
        number: ActiveValue::Set(100),
        complement: ActiveValue::Set(None),
        city: ActiveValue::Set(Some("Sao Paulo".to_string())),
        state: ActiveValue::Set(Some("SP".to_string())),
        student_fk: ActiveValue::Set(student_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
