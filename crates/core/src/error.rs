//! Error types for the planner's domain logic
//!
//! The reducer itself never fails; these cover the edges around it: form
//! submission, page-id parsing, host init data and configuration.

use thiserror::Error;

/// Errors raised when a form is submitted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Пожалуйста, заполните все обязательные поля")]
    MissingRequiredFields,

    #[error("Нужно войти в систему")]
    NotSignedIn,

    #[error("Некорректная дата: {0}")]
    InvalidDate(String),

    #[error("Некорректное время: {0}")]
    InvalidTime(String),
}

/// Errors raised by strict page-id parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown page id: {0}")]
    UnknownPage(String),

    #[error("Invalid employee id in page id: {0}")]
    InvalidEmployeeId(String),
}

/// Errors raised while reading the host environment's init data
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Invalid user JSON in init data: {0}")]
    InvalidUser(#[from] serde_json::Error),
}

/// Configuration loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Result type alias for form submission
pub type FormResult<T> = Result<T, FormError>;
