//! Violation errors and handling policies.

use thiserror::Error;

/// A configured rule that a call to `Transformer::run` failed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("Action limit ({limit}) exceeded (received: {received})")]
    TooManyActions { limit: usize, received: usize },

    #[error("Unrecognized action type {kind:?} at index {index}")]
    UnknownAction { index: usize, kind: String },
}

/// Errors returned by `Transformer::run`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Every violated rule, in rule order then action order
    #[error("Transform rejected: {}", describe(.0))]
    Rejected(Vec<Violation>),
}

impl TransformError {
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Rejected(violations) => violations,
        }
    }
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Policy for actions whose `type` tag is not recognized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownActionPolicy {
    /// Produce a pass-through snapshot
    #[default]
    PassThrough,

    /// Produce a pass-through snapshot but log a warning
    PassThroughAndLog,

    /// Reject the whole call
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_lists_every_violation() {
        let error = TransformError::Rejected(vec![
            Violation::TooManyActions {
                limit: 1,
                received: 2,
            },
            Violation::UnknownAction {
                index: 1,
                kind: "noop".to_string(),
            },
        ]);

        assert_eq!(
            error.to_string(),
            "Transform rejected: Action limit (1) exceeded (received: 2); \
             Unrecognized action type \"noop\" at index 1"
        );
        assert_eq!(error.violations().len(), 2);
    }

    #[test]
    fn default_policy_passes_through() {
        assert_eq!(
            UnknownActionPolicy::default(),
            UnknownActionPolicy::PassThrough
        );
    }
}
