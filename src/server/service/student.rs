use sea_orm::DatabaseConnection;

use crate::{
    model::student::StudentDto,
    server::{
        data::student::StudentRepository,
        error::AppError,
        model::student::{CreateStudentParam, Student, UpdateStudentParam},
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student with its nested location and course enrollments.
    ///
    /// The whole sequence runs in one transaction inside the repository; any
    /// persistence failure (duplicate email or cpf included) maps to a 400.
    pub async fn create(&self, param: CreateStudentParam) -> Result<StudentDto, AppError> {
        let student = StudentRepository::new(self.db)
            .create(param)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(student.into_dto())
    }

    /// Gets all students with their location and enrolled courses
    pub async fn get_all(&self) -> Result<Vec<StudentDto>, AppError> {
        let students = StudentRepository::new(self.db)
            .get_all_with_relations()
            .await?;

        Ok(students.into_iter().map(Student::into_dto).collect())
    }

    /// Gets a student by id with location and enrolled courses
    pub async fn get_by_id(&self, id: i32) -> Result<StudentDto, AppError> {
        let student = StudentRepository::new(self.db)
            .get_by_id_with_relations(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        Ok(student.into_dto())
    }

    /// Updates a student, then reloads and returns the full aggregate
    pub async fn update(&self, id: i32, param: UpdateStudentParam) -> Result<StudentDto, AppError> {
        let repo = StudentRepository::new(self.db);

        let student = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        repo.update(student, param)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let updated = repo
            .get_by_id_with_relations(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        Ok(updated.into_dto())
    }

    /// Deletes a student by id; the location goes with it via the schema cascade
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = StudentRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        Ok(())
    }
}
