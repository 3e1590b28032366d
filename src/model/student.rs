use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Gender choices accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum GenderDto {
    Male,
    Female,
    #[serde(rename = "Non-binary")]
    NonBinary,
    Other,
    PreferNotToSay,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub id_location: i32,
    pub postal_code: String,
    pub country: String,
    pub street: Option<String>,
    pub district: Option<String>,
    pub number: i32,
    pub complement: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub student_fk: i32,
}

/// A course the student is enrolled in, with the conclusion date projected
/// from the association row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrolledCourseDto {
    pub id_course: i32,
    pub name: String,
    pub conclusion_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id_student: i32,
    pub name: String,
    pub lastname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub gender: Option<GenderDto>,
    pub email: String,
    pub register_date: DateTime<Utc>,
    pub location: Option<LocationDto>,
    pub courses: Vec<EnrolledCourseDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateLocationDto {
    pub postal_code: String,
    pub country: String,
    pub street: Option<String>,
    pub district: Option<String>,
    pub number: i32,
    pub complement: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// One entry of the `courses` list on student create/update requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentDto {
    pub course_id: i32,
    pub conclusion_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub name: String,
    pub lastname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub gender: Option<GenderDto>,
    pub email: String,
    pub location: CreateLocationDto,
    #[serde(default)]
    pub courses: Vec<EnrollmentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateLocationDto {
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub street: Option<String>,
    pub district: Option<String>,
    pub number: Option<i32>,
    pub complement: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub birthdate: Option<NaiveDate>,
    pub cpf: Option<String>,
    pub gender: Option<GenderDto>,
    pub email: Option<String>,
    pub location: Option<UpdateLocationDto>,
    pub courses: Option<Vec<EnrollmentDto>>,
}
