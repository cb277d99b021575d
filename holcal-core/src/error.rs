//! Error types for holcal operations.

use thiserror::Error;

/// Failures reaching or understanding the remote holiday store.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to reach holiday store: {0}")]
    Connect(String),

    #[error("Holiday store returned status {0}")]
    Status(u16),

    #[error("Malformed response from holiday store: {0}")]
    Payload(String),
}

/// Local input problems, checked before any store call is made.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Holiday name must not be empty")]
    EmptyName,

    #[error("No day selected")]
    NoDaySelected,
}

/// Umbrella error for controller operations.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Result type alias for holcal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
