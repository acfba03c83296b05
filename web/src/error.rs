use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error(DomainError);

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

// Translates domain error kinds into HTTP status codes. Every failure kind
// gets a distinct status, but the JSON body keeps the single
// `{ success: false, error }` shape clients already parse.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = self.0.message();
        let status_code = match &self.0.error_kind {
            DomainErrorKind::Internal(internal_error_kind) => match internal_error_kind {
                InternalErrorKind::UnsupportedInputKind(_) => StatusCode::UNPROCESSABLE_ENTITY,
                InternalErrorKind::InputRead => StatusCode::NOT_FOUND,
                InternalErrorKind::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            DomainErrorKind::External(external_error_kind) => match external_error_kind {
                ExternalErrorKind::Transcription
                | ExternalErrorKind::MediaExtraction
                | ExternalErrorKind::Annotation => StatusCode::BAD_GATEWAY,
                ExternalErrorKind::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        };

        (
            status_code,
            Json(json!({ "success": false, "error": message })),
        )
            .into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
