use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::domain_error::DomainError;
use crate::error::Error;

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    detail: String,
}

pub fn status_code(error: &Error) -> StatusCode {
    match error {
        Error::Domain(DomainError::NoActiveRound(_)) => StatusCode::NOT_FOUND,
        Error::Domain(
            DomainError::HintLimitReached(_)
            | DomainError::InvalidStateForQuestion(..)
            | DomainError::InvalidStateForGuess(..),
        ) => StatusCode::CONFLICT,
        Error::Domain(DomainError::NoWordAvailable { .. }) | Error::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        Error::Domain(_) => StatusCode::BAD_REQUEST,
        Error::Remote(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        if status.is_server_error() {
            log::error!("Request failed. Error: '{self}'.");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.code(),
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
