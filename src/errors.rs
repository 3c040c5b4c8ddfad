use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use validator::ValidationErrors;
use crate::models::{ErrorResponse, FieldError};
use crate::services::AuditError;

const INVALID_INPUT: &str = "Invalid input data";
const GENERATION_FAILED: &str = "Failed to generate recommendations";

/// Errors surfaced at the HTTP boundary
///
/// Client errors carry per-field detail. Server errors are logged and
/// rendered as a generic message without partial results.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid request fields: {} rejected", .0.len())]
    InvalidFields(Vec<FieldError>),

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),
}

impl ApiError {
    /// Per-field details for client errors
    ///
    /// Validator failures are sorted by field name; decoding failures keep
    /// request field order.
    pub fn details(&self) -> Vec<FieldError> {
        match self {
            ApiError::Validation(errors) => {
                let mut details: Vec<FieldError> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errs)| {
                        let field = field.to_string();
                        errs.iter().map(move |e| FieldError {
                            field: Some(field.clone()),
                            code: e.code.to_string(),
                            message: e
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{} is invalid", field)),
                        })
                    })
                    .collect();
                details.sort_by(|a, b| a.field.cmp(&b.field));
                details
            }
            ApiError::InvalidFields(details) => details.clone(),
            ApiError::InvalidPayload(message) => vec![FieldError {
                field: None,
                code: "invalid_json".to_string(),
                message: message.clone(),
            }],
            ApiError::Audit(_) => Vec::new(),
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidFields(_) | ApiError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Audit(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Validation(_) | ApiError::InvalidFields(_) | ApiError::InvalidPayload(_) => {
                INVALID_INPUT
            }
            ApiError::Audit(e) => {
                tracing::error!("Audit error: {}", e);
                GENERATION_FAILED
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            success: false,
            error: message.to_string(),
            details: self.details(),
        })
    }
}

/// Route unparseable JSON bodies to the same 400 shape as validation failures
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidPayload(err.to_string()).into()
}

/// Same for unparseable query strings
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    ApiError::InvalidPayload(err.to_string()).into()
}
