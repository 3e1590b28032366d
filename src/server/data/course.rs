use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course
    pub async fn create(&self, name: String) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all courses ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::IdCourse)
            .all(self.db)
            .await
    }

    /// Gets a course by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    /// Applies a partial update to a course; returns None when no course matches
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
    ) -> Result<Option<entity::course::Model>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let Some(name) = name else {
            return Ok(Some(course));
        };

        let mut active_model: entity::course::ActiveModel = course.into();
        active_model.name = ActiveValue::Set(name);

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a course, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
