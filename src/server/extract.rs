//! Request extractors with API-conformant rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::server::error::AppError;

/// JSON body extractor whose rejection follows the API error contract.
///
/// Axum's stock `Json` rejects malformed or incomplete bodies with a 422 and a
/// plain-text message; every validation failure in this API is a 400 with an
/// `{"error": <message>}` body, so handlers use this wrapper for request
/// bodies. It also serializes responses, so handlers only deal with one `Json`
/// type.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
