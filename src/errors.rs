use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("A quiz with this title already exists. Please choose a different title.")]
    DuplicateTitle,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("AI returned no JSON block.\nOutput:\n{0}")]
    NoJsonFound(String),

    #[error("AI returned invalid JSON: {0}")]
    MalformedJson(String),

    #[error("AI response did not match the expected quiz format: {0}")]
    SchemaError(String),

    #[error("Quiz must have at least 1 question")]
    EmptyQuiz,

    #[error("AI service error: {0}")]
    AiError(String),

    #[error("Quiz generation failed: {0}")]
    GenerationError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::InvalidSchedule(_) => "INVALID_SCHEDULE",
            AppError::DuplicateTitle => "DUPLICATE_TITLE",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::NoJsonFound(_) => "NO_JSON_FOUND",
            AppError::MalformedJson(_) => "MALFORMED_JSON",
            AppError::SchemaError(_) => "SCHEMA_ERROR",
            AppError::EmptyQuiz => "EMPTY_QUIZ",
            AppError::AiError(_) => "AI_ERROR",
            AppError::GenerationError(_) => "GENERATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_)
            | AppError::InvalidSchedule(_)
            | AppError::DuplicateTitle
            | AppError::NoJsonFound(_)
            | AppError::MalformedJson(_)
            | AppError::SchemaError(_)
            | AppError::EmptyQuiz => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_)
            | AppError::AiError(_)
            | AppError::GenerationError(_)
            | AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.error_code(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::AiError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
