//! Custom error types and handling
//!
//! This module defines the application's error types. Every failure is
//! reported synchronously to the immediate caller and leaves the record
//! store unchanged; the presentation layer owns display and re-attempts.

use crate::models::BanRecord;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is banned")]
    AccountBanned(BanRecord),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // Registration errors
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Username already taken")]
    DuplicateUsername,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    // Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    ///
    /// Stable identifiers for the presentation layer, which owns the
    /// user-facing wording.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::AccountBanned(_) => "ACCOUNT_BANNED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::DuplicateUsername => "DUPLICATE_USERNAME",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The ban record attached to an `AccountBanned` error, if any
    pub fn ban_record(&self) -> Option<&BanRecord> {
        match self {
            Self::AccountBanned(record) => Some(record),
            _ => None,
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
