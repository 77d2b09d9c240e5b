// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

pub const NOT_FOUND_ROUTE_MESSAGE: &str = "The requested URL was not found.";
pub const SERVER_ERROR_MESSAGE: &str = "Sorry, a technical error has occurred.";

/// Fixed error body: `status` is "fail" for client errors and "error" for
/// server errors, mirroring the success envelope's key layout.
pub fn error_body(status: StatusCode, message: &str) -> Value {
    let kind = if status.is_server_error() {
        "error"
    } else {
        "fail"
    };
    json!({
        "statusCode": status.as_u16(),
        "status": kind,
        "message": message,
    })
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "infrastructure failure");
                Self::internal()
            }
        }
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            SERVER_ERROR_MESSAGE.to_string(),
        )
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        // Server-side detail never reaches the client; the fixed wording does.
        let message = if self.status.is_server_error() {
            SERVER_ERROR_MESSAGE
        } else {
            self.message.as_str()
        };
        (self.status, Json(error_body(self.status, message))).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
