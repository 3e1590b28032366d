use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentCourseDto {
    pub student_id: i32,
    pub course_id: i32,
    pub conclusion_date: Option<NaiveDate>,
}

/// Body for creating an association. Both ids are modelled as optional so a
/// missing field maps to a 400 response instead of a body decode rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentCourseDto {
    pub student_id: Option<i32>,
    pub course_id: Option<i32>,
    pub conclusion_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentCourseDto {
    pub student_id: Option<i32>,
    pub course_id: Option<i32>,
    pub conclusion_date: Option<NaiveDate>,
}
