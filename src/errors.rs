// ABOUTME: Unified error handling with standard error codes for the sizing crate
// ABOUTME: Covers parse and configuration failures; the engine itself never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Handling
//!
//! Standard error types for the few fallible surfaces of this crate: parsing
//! garment sizes and genders from wire strings, and loading configuration.
//! The recommendation engine is deliberately total and produces no errors —
//! invalid input is absorbed via defaulting and clamping (see
//! [`crate::sizing::engine`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input value is invalid (out of domain, unknown label)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Input value has an invalid format (unparseable)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// Configuration is invalid or failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
}

impl ErrorCode {
    /// Stable string representation of the code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::ConfigInvalid => "CONFIG_INVALID",
        }
    }
}

/// Application error with a standard code and human-readable message
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{}: {message}", .code.as_str())]
pub struct AppError {
    /// Standard error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Create an invalid format error
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Create a configuration error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }
}

/// Result type alias using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_code_and_message() {
        let err = AppError::invalid_input("unknown size label");
        assert_eq!(err.to_string(), "INVALID_INPUT: unknown size label");
    }

    #[test]
    fn error_codes_have_stable_names() {
        assert_eq!(ErrorCode::InvalidFormat.as_str(), "INVALID_FORMAT");
        assert_eq!(ErrorCode::ConfigInvalid.as_str(), "CONFIG_INVALID");
    }
}
