use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        course::{CourseDto, CreateCourseDto, UpdateCourseDto},
    },
    server::{error::AppError, extract::Json, service::course::CourseService, state::AppState},
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Create a new course.
///
/// # Returns
/// - `201 Created` - Successfully created course
/// - `400 Bad Request` - Missing name or persistence failure
#[utoipa::path(
    post,
    path = "/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).create(payload.name).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// Get all courses.
///
/// # Returns
/// - `200 OK` - List of all courses, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(courses)))
}

/// Get a course by id.
///
/// # Returns
/// - `200 OK` - The requested course
/// - `404 Not Found` - No course with that id
#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(course)))
}

/// Update a course by id.
///
/// # Returns
/// - `200 OK` - The updated course
/// - `400 Bad Request` - Validation or persistence failure
/// - `404 Not Found` - No course with that id
#[utoipa::path(
    put,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = CourseDto),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::new(&state.db)
        .update(id, payload.name)
        .await?;

    Ok((StatusCode::OK, Json(course)))
}

/// Delete a course by id.
///
/// # Returns
/// - `204 No Content` - Successfully deleted course
/// - `404 Not Found` - No course with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = COURSE_TAG,
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted course"),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CourseService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
