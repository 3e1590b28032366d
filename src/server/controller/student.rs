use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{CreateStudentDto, StudentDto, UpdateStudentDto},
    },
    server::{
        error::AppError,
        extract::Json,
        model::student::{CreateStudentParam, UpdateStudentParam},
        service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Create a new student.
///
/// Persists the student together with its nested location and one association
/// row per `courses` entry whose course id exists; unknown course ids are
/// skipped without failing the request. The whole write sequence runs in a
/// single transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student creation data with nested location and courses
///
/// # Returns
/// - `201 Created` - The created student; associations are not re-queried
/// - `400 Bad Request` - Duplicate email/cpf or any other persistence failure
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateStudentParam::from_dto(payload);
    let student = StudentService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// Get all students.
///
/// Each student includes its location and the enrolled courses with the
/// `conclusion_date` join attribute projected.
///
/// # Returns
/// - `200 OK` - List of all students, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(students)))
}

/// Get a student by id, with location and enrolled courses.
///
/// # Returns
/// - `200 OK` - The requested student
/// - `404 Not Found` - No student with that id
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Update a student by id.
///
/// Applies partial scalar updates, updates or creates the student's location
/// when a location payload is present, and replaces all course enrollments
/// when a non-empty courses list is present (unknown course ids skipped).
/// The updated student is reloaded with all relations before responding.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Student ID to update
/// - `payload` - Partial student data with optional location and courses
///
/// # Returns
/// - `200 OK` - The fully reloaded student
/// - `400 Bad Request` - Validation or persistence failure during the sequence
/// - `404 Not Found` - No student with that id
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateStudentParam::from_dto(payload);
    let student = StudentService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Delete a student by id.
///
/// Only the student row is deleted here; the location row is removed by the
/// schema-level cascade.
///
/// # Returns
/// - `204 No Content` - Successfully deleted student
/// - `404 Not Found` - No student with that id
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted student"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
