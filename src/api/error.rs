use std::error::Error as _;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::api::job_role::error::{ErrorKind, ServiceError};
use crate::api::validation::ErrorResponse;
use crate::config::RuntimeMode;

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Errors that can leave an HTTP handler
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A classified service error; its message is shown to the caller
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A path parameter the route requires was not supplied
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),
}

impl ApiError {
    fn is_classified(&self) -> bool {
        matches!(self, ApiError::Service(_))
    }

    /// Message safe to put in the response body
    fn public_message(&self) -> String {
        match self {
            ApiError::Service(err) => err.to_string(),
            ApiError::MissingParameter(_) => INTERNAL_SERVER_ERROR.to_string(),
        }
    }

    /// Source chain, one cause per line
    fn trace(&self) -> String {
        let mut trace = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            trace.push_str("\ncaused by: ");
            trace.push_str(&cause.to_string());
            source = cause.source();
        }
        trace
    }

    /// Render the error envelope, attaching the cause chain to server
    /// errors in development mode
    pub fn render(&self, mode: RuntimeMode) -> HttpResponse {
        let status = self.status_code();

        if self.is_classified() && !status.is_server_error() {
            warn!("Request rejected: {}", self);
        } else {
            error!("Request failed: {}", self.trace());
        }

        let mut body = ErrorResponse::new(self.public_message());
        if mode.is_development() && status.is_server_error() {
            body.stack = Some(self.trace());
        }

        HttpResponse::build(status).json(body)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Service(err) => match err.kind() {
                ErrorKind::Validation => StatusCode::BAD_REQUEST,
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Database => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::MissingParameter(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.render(RuntimeMode::Production)
    }
}
