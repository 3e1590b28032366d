use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        student_course::{CreateStudentCourseDto, StudentCourseDto, UpdateStudentCourseDto},
    },
    server::{
        error::AppError, extract::Json, service::student_course::StudentCourseService,
        state::AppState,
    },
};

/// Tag for grouping student-course association endpoints in OpenAPI documentation
pub static STUDENT_COURSE_TAG: &str = "student_course";

/// Create a new student-course association.
///
/// Both ids are required; duplicate (student, course) pairs and ids that do
/// not reference existing rows are rejected by the schema and surface as 400.
///
/// # Returns
/// - `201 Created` - The created association row
/// - `400 Bad Request` - Missing ids, duplicate pair, or dangling foreign key
#[utoipa::path(
    post,
    path = "/student-course",
    tag = STUDENT_COURSE_TAG,
    request_body = CreateStudentCourseDto,
    responses(
        (status = 201, description = "Successfully created association", body = StudentCourseDto),
        (status = 400, description = "Invalid association data", body = ErrorDto)
    ),
)]
pub async fn create_student_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(student_id), Some(course_id)) = (payload.student_id, payload.course_id) else {
        return Err(AppError::BadRequest(
            "The student_id and course_id fields are required".to_string(),
        ));
    };

    let record = StudentCourseService::new(&state.db)
        .create(student_id, course_id, payload.conclusion_date)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Get all student-course associations.
///
/// Returns the raw association rows without expanding either related entity.
///
/// # Returns
/// - `200 OK` - List of all association rows, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/student-course",
    tag = STUDENT_COURSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved associations", body = Vec<StudentCourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let records = StudentCourseService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(records)))
}

/// Get an association by its composite key.
///
/// # Returns
/// - `200 OK` - The matching association row
/// - `404 Not Found` - No association for that (student, course) pair
#[utoipa::path(
    get,
    path = "/student-course/{student_id}/{course_id}",
    tag = STUDENT_COURSE_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved association", body = StudentCourseDto),
        (status = 404, description = "Association not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_course_by_keys(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let record = StudentCourseService::new(&state.db)
        .get_by_keys(student_id, course_id)
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Update an association by its composite key.
///
/// Requires both new ids in the body and may repoint the composite key itself.
/// The existence check runs first, so a missing row is a 404 even when the
/// body is also incomplete.
///
/// # Returns
/// - `200 OK` - The updated association row
/// - `400 Bad Request` - Missing ids or persistence failure
/// - `404 Not Found` - No association for that (student, course) pair
#[utoipa::path(
    put,
    path = "/student-course/{student_id}/{course_id}",
    tag = STUDENT_COURSE_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateStudentCourseDto,
    responses(
        (status = 200, description = "Successfully updated association", body = StudentCourseDto),
        (status = 400, description = "Invalid association data", body = ErrorDto),
        (status = 404, description = "Association not found", body = ErrorDto)
    ),
)]
pub async fn update_student_course(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateStudentCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let record = StudentCourseService::new(&state.db)
        .update(
            student_id,
            course_id,
            payload.student_id,
            payload.course_id,
            payload.conclusion_date,
        )
        .await?;

    Ok((StatusCode::OK, Json(record)))
}

/// Delete an association by its composite key.
///
/// # Returns
/// - `204 No Content` - Successfully deleted association
/// - `404 Not Found` - No association for that (student, course) pair
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/student-course/{student_id}/{course_id}",
    tag = STUDENT_COURSE_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID"),
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted association"),
        (status = 404, description = "Association not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student_course(
    State(state): State<AppState>,
    Path((student_id, course_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    StudentCourseService::new(&state.db)
        .delete(student_id, course_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
