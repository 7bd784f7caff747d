//! Error types for the handler crate.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use std::time::Duration;
use thiserror::Error;

/// Errors produced while handling a single message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// The message had zero length
    #[error("Empty input!")]
    EmptyInput,

    /// The wrapped handler panicked inside a background unit
    #[error("Handler panicked: {0}")]
    TaskPanicked(String),
}

/// Errors that can occur while waiting for an outcome on a result channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReceiveError {
    /// No outcome arrived within the allowed window
    #[error("No outcome received within {0:?}")]
    Timeout(Duration),

    /// Every sending end was dropped and the channel is drained
    #[error("Result channel closed")]
    Closed,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with HandlerError
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
