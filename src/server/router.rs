use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{course, student, student_course},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(paths(
    course::create_course,
    course::get_courses,
    course::get_course_by_id,
    course::update_course,
    course::delete_course,
    student::create_student,
    student::get_students,
    student::get_student_by_id,
    student::update_student,
    student::delete_student,
    student_course::create_student_course,
    student_course::get_student_courses,
    student_course::get_student_course_by_keys,
    student_course::update_student_course,
    student_course::delete_student_course,
))]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/courses",
            post(course::create_course).get(course::get_courses),
        )
        .route(
            "/courses/{id}",
            get(course::get_course_by_id)
                .put(course::update_course)
                .delete(course::delete_course),
        )
        .route(
            "/students",
            post(student::create_student).get(student::get_students),
        )
        .route(
            "/students/{id}",
            get(student::get_student_by_id)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/student-course",
            post(student_course::create_student_course).get(student_course::get_student_courses),
        )
        .route(
            "/student-course/{student_id}/{course_id}",
            get(student_course::get_student_course_by_keys)
                .put(student_course::update_student_course)
                .delete(student_course::delete_student_course),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
