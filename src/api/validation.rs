use actix_web::{HttpResponse, error::JsonPayloadError, web::JsonConfig};
use serde::Serialize;
use tracing::warn;

/// JSON error envelope shared by every endpoint
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            stack: None,
        }
    }
}

/// Creates a configured JsonConfig with standardized error handling for the entire project
///
/// Body parsing failures are caller mistakes, so they are answered with 400
/// (413 for oversized bodies) in the same envelope as service errors.
pub fn json_config(limit: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let response = match &err {
                JsonPayloadError::Overflow { .. }
                | JsonPayloadError::OverflowKnownLength { .. } => HttpResponse::PayloadTooLarge()
                    .json(ErrorResponse::new("Request body is too large")),
                JsonPayloadError::ContentType => HttpResponse::BadRequest()
                    .json(ErrorResponse::new("Expected Content-Type: application/json")),
                JsonPayloadError::Deserialize(de_err) if de_err.is_eof() => {
                    HttpResponse::BadRequest()
                        .json(ErrorResponse::new("Request body is empty. Expected JSON payload"))
                }
                JsonPayloadError::Deserialize(de_err) if de_err.is_data() => {
                    HttpResponse::BadRequest()
                        .json(ErrorResponse::new("Invalid field type in JSON payload"))
                }
                _ => HttpResponse::BadRequest().json(ErrorResponse::new("Invalid JSON format")),
            };

            warn!("Rejected request body: {}", err);
            actix_web::error::InternalError::from_response(err, response).into()
        })
}
