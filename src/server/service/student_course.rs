use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    model::student_course::StudentCourseDto,
    server::{data::student_course::StudentCourseRepository, error::AppError},
};

pub struct StudentCourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentCourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an association; duplicate pairs and dangling ids map to a 400
    pub async fn create(
        &self,
        student_id: i32,
        course_id: i32,
        conclusion_date: Option<NaiveDate>,
    ) -> Result<StudentCourseDto, AppError> {
        let record = StudentCourseRepository::new(self.db)
            .create(student_id, course_id, conclusion_date)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(record_to_dto(record))
    }

    /// Gets all association rows
    pub async fn get_all(&self) -> Result<Vec<StudentCourseDto>, AppError> {
        let records = StudentCourseRepository::new(self.db).get_all().await?;

        Ok(records.into_iter().map(record_to_dto).collect())
    }

    /// Gets the association matching both keys
    pub async fn get_by_keys(
        &self,
        student_id: i32,
        course_id: i32,
    ) -> Result<StudentCourseDto, AppError> {
        let record = StudentCourseRepository::new(self.db)
            .get_by_keys(student_id, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Association not found".to_string()))?;

        Ok(record_to_dto(record))
    }

    /// Updates the association matching both keys.
    ///
    /// The existence check runs before body validation so a missing row yields
    /// a 404 even when the body is also incomplete. Both new ids are required;
    /// the update may repoint the composite key itself.
    pub async fn update(
        &self,
        student_id: i32,
        course_id: i32,
        new_student_id: Option<i32>,
        new_course_id: Option<i32>,
        conclusion_date: Option<NaiveDate>,
    ) -> Result<StudentCourseDto, AppError> {
        let repo = StudentCourseRepository::new(self.db);

        let existing = repo
            .get_by_keys(student_id, course_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Association not found".to_string()))?;

        let (Some(new_student_id), Some(new_course_id)) = (new_student_id, new_course_id) else {
            return Err(AppError::BadRequest(
                "The student_id and course_id fields are required for updates".to_string(),
            ));
        };

        let record = repo
            .update(existing, new_student_id, new_course_id, conclusion_date)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(record_to_dto(record))
    }

    /// Deletes the association matching both keys
    pub async fn delete(&self, student_id: i32, course_id: i32) -> Result<(), AppError> {
        let deleted = StudentCourseRepository::new(self.db)
            .delete(student_id, course_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Association not found".to_string()));
        }

        Ok(())
    }
}

fn record_to_dto(record: entity::student_course::Model) -> StudentCourseDto {
    StudentCourseDto {
        student_id: record.student_id,
        course_id: record.course_id,
        conclusion_date: record.conclusion_date,
    }
}
