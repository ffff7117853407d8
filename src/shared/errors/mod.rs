//! Error Types
//!
//! Layered error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("A driver with username '{0}' already exists")]
    UsernameTaken(String),

    #[error("A driver with license number '{0}' already exists")]
    LicenseNumberTaken(String),

    #[error("Password rejected: {0:?}")]
    WeakPassword(Vec<String>),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Errors raised by the credential (password hashing) collaborator
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Errors raised while rendering a page
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Template rendering failed: {0}")]
    Rendering(String),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Credential(#[from] CredentialError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(DomainError::WeakPassword(_) | DomainError::InvalidState(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::UsernameTaken(_) | DomainError::LicenseNumberTaken(_)) => {
                StatusCode::CONFLICT
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Repository(_) | Self::Credential(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Domain(DomainError::UsernameTaken(_) | DomainError::LicenseNumberTaken(_)) => {
                "CONFLICT"
            }
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Domain(DomainError::WeakPassword(_)) => "WEAK_PASSWORD",
            Self::Domain(DomainError::InvalidState(_)) => "INVALID_STATE",
            Self::Repository(_) | Self::Credential(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the error is caused by the caller's input rather than a fault
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

/// Handler-level error turned into an HTTP response
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            WebError::UseCase(uc_error) if uc_error.is_client_error() => (
                uc_error.status_code(),
                uc_error.error_code().to_string(),
                uc_error.to_string(),
            ),
            WebError::UseCase(uc_error) => {
                tracing::error!(error = %uc_error, "Use case failed");
                (
                    uc_error.status_code(),
                    uc_error.error_code().to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
            WebError::Render(err) => {
                tracing::error!(error = %err, "Page rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
            WebError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR".to_string(),
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: ErrorDetail { code, message },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(body)).into_response()
    }
}
