// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Engine error types.

/// Error type returned by every fallible engine operation.
///
/// The engine performs no retries of its own; failures surface synchronously
/// and the caller translates them into a user-facing response. An absent
/// fitness threshold is not an error: admission is an automatic pass in
/// that case.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl MatchError {
    /// True for rejections the caller should report as a client error rather
    /// than a store fault.
    pub fn is_rejection(&self) -> bool {
        matches!(self, MatchError::Conflict(_) | MatchError::Validation(_))
    }
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, MatchError>;
