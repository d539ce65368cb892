//! Engine-boundary error type.
//!
//! `AppError` is what services hand to their caller. It carries the stable
//! `ErrorCode` a transport layer needs plus a human-readable detail, and is
//! built from `DomainError` so domain code never names codes directly.

use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { code: ErrorCode, detail: String },
}

impl AppError {
    /// The stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Internal { code, .. } => *code,
        }
    }

    /// The human-readable detail for this error.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Internal { detail, .. } => detail,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let code = ErrorCode::from(&err);
        match err {
            DomainError::Validation(_, detail) => AppError::Validation { code, detail },
            DomainError::Conflict(_, detail) => AppError::Conflict { code, detail },
            DomainError::NotFound(_, detail) => AppError::NotFound { code, detail },
            DomainError::Infra(_, detail) => AppError::Internal { code, detail },
        }
    }
}
