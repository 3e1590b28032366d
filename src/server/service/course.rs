use sea_orm::DatabaseConnection;

use crate::{
    model::course::CourseDto,
    server::{data::course::CourseRepository, error::AppError},
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new course; any persistence failure maps to a 400
    pub async fn create(&self, name: String) -> Result<CourseDto, AppError> {
        let course = CourseRepository::new(self.db)
            .create(name)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(course_to_dto(course))
    }

    /// Gets all courses
    pub async fn get_all(&self) -> Result<Vec<CourseDto>, AppError> {
        let courses = CourseRepository::new(self.db).get_all().await?;

        Ok(courses.into_iter().map(course_to_dto).collect())
    }

    /// Gets a course by id
    pub async fn get_by_id(&self, id: i32) -> Result<CourseDto, AppError> {
        let course = CourseRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        Ok(course_to_dto(course))
    }

    /// Applies a partial update to a course
    pub async fn update(&self, id: i32, name: Option<String>) -> Result<CourseDto, AppError> {
        let course = CourseRepository::new(self.db)
            .update(id, name)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
            .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

        Ok(course_to_dto(course))
    }

    /// Deletes a course by id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = CourseRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        Ok(())
    }
}

fn course_to_dto(course: entity::course::Model) -> CourseDto {
    CourseDto {
        id_course: course.id_course,
        name: course.name,
    }
}
