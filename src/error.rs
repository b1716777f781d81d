//! UI Errors
//!
//! Every failed user action ends in an `AppError` whose `Display` is the
//! message shown to the user.

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Rejected before any request was made
    Validation(&'static str),
    /// Same action already in flight
    Busy,
    /// Backend call failed
    Request {
        message: &'static str,
        source: ApiError,
    },
}

impl AppError {
    pub fn request(message: &'static str, source: ApiError) -> Self {
        AppError::Request { message, source }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msg) => f.write_str(msg),
            AppError::Busy => f.write_str("Aguarde, a operação anterior ainda está em andamento."),
            AppError::Request { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Request { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Show an error to the user with a blocking browser alert.
pub fn alert_user(err: &AppError) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&err.to_string());
    }
}
