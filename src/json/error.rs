//! JSON boundary error types.

use crate::core::ActionError;
use crate::transformer::TransformError;
use thiserror::Error;

/// A problem with one element of an action array
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("action {index}: {error}")]
pub struct ActionIssue {
    /// Position of the offending element
    pub index: usize,
    pub error: ActionError,
}

/// Errors that can occur when decoding or rendering JSON input and output
#[derive(Debug, Error)]
pub enum JsonError {
    /// Initial state was not a JSON object
    #[error("Initial state must be a JSON object, found {found}")]
    StateNotObject { found: &'static str },

    /// Action list was not a JSON array
    #[error("Actions must be a JSON array, found {found}")]
    ActionsNotArray { found: &'static str },

    /// One or more elements of the action array could not be decoded
    #[error("Invalid actions: {}", describe(.0))]
    InvalidActions(Vec<ActionIssue>),

    /// Decoded input was rejected by the transformer's rules
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Serialization of a history failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

fn describe(issues: &[ActionIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
