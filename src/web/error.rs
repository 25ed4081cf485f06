use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::model::CompletionError;
use crate::web::models::ErrorResponse;
use crate::zodiac::ZodiacError;

pub const FAILURE_PREFIX: &str = "Failed to generate horoscope.";

#[derive(Error, Debug)]
pub enum HoroscopeError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("malformed request body: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("field '{field}' must be a string, got {value}")]
    NonStringField { field: &'static str, value: String },

    #[error("time data '{input}' does not match format YYYY-MM-DD: {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },

    #[error(transparent)]
    Zodiac(#[from] ZodiacError),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("model reply is not a daily/weekly/monthly object: {0}")]
    InvalidModelOutput(serde_json::Error),
}

impl HoroscopeError {
    /// Whether the caller is at fault. Only absent fields count; a bad date
    /// is reported as a server failure like every other error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, HoroscopeError::MissingFields)
    }
}

impl ResponseError for HoroscopeError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = if self.is_client_error() {
            self.to_string()
        } else {
            format!("{} {}", FAILURE_PREFIX, self)
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { error })
    }
}
