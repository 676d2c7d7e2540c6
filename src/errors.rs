// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

use crate::models::FieldErrors;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to appropriate HTTP status code and error response
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Place not found with id: {0}")]
    NotFound(String),

    #[error("The given data was invalid.")]
    ValidationError(FieldErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl PlacesError {
    fn error_code(&self) -> &'static str {
        match self {
            PlacesError::NotFound(_) => "NOT_FOUND",
            PlacesError::ValidationError(_) => "VALIDATION_ERROR",
            PlacesError::InvalidInput(_) => "INVALID_INPUT",
            PlacesError::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}

/// Convert PlacesError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for PlacesError {
    fn error_response(&self) -> HttpResponse {
        let mut error = json!({
            "code": self.error_code(),
            "message": self.to_string(),
            "timestamp": chrono::Utc::now().to_rfc3339()
        });

        if let PlacesError::ValidationError(fields) = self {
            error["fields"] = json!(fields);
        }

        HttpResponse::build(self.status_code()).json(json!({ "error": error }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::NotFound(_) => StatusCode::NOT_FOUND,
            PlacesError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PlacesError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PlacesError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
