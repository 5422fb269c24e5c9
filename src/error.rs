use crate::service::llm::LlmError;
use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("LLM client error: {0}")]
    Llm(#[from] LlmError),
    #[error("Validation error: {0}")]
    Validation(ValidationDetails),
    #[error("Not Found")]
    NotFound,
    #[error("Generic error: {0}")]
    Generic(String),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ValidationDetails {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field: {}, Message: {}", self.field, self.message)
    }
}

impl From<ValidationDetails> for AppError {
    fn from(details: ValidationDetails) -> Self {
        AppError::Validation(details)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub code: u16,
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl AppError {
    fn status(&self) -> (StatusCode, String) {
        match self {
            AppError::Validation(_) => {
                (StatusCode::BAD_REQUEST, t!("errors.http.bad_request").to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, t!("errors.http.not_found").to_string()),
            AppError::Anyhow(_) | AppError::Config(_) | AppError::Llm(_) | AppError::Generic(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                t!("errors.http.internal_server_error").to_string(),
            ),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status().0
    }

    fn error_response(&self) -> HttpResponse {
        let response = ErrorResponse::from(self);
        let status_code = StatusCode::from_u16(response.code).unwrap_or_else(|_| {
            log::error!("{}", t!("logs.invalid_status_code", code = response.code));
            StatusCode::INTERNAL_SERVER_ERROR
        });
        HttpResponse::build(status_code).content_type(ContentType::json()).json(response)
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        let (code, status) = error.status();

        let data = match error {
            AppError::Validation(details) => serde_json::to_value(details)
                .map_err(|err| log::error!("Failed to serialize validation details: {}", err))
                .ok(),
            _ => None,
        };

        ErrorResponse { code: code.as_u16(), status, message: error.to_string(), data }
    }
}

impl From<AppError> for std::io::Error {
    fn from(err: AppError) -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
