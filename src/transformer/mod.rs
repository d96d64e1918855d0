//! Configurable shell around the pure transform.
//!
//! `Transformer` checks a call against its configured rules before running
//! the fold. Rules are evaluated using Stillwater's `Validation` type, so a
//! rejected call reports ALL violations at once instead of the first one.
//!
//! # Example
//!
//! ```rust
//! use state_history::core::{Action, State};
//! use state_history::transformer::{Transformer, UnknownActionPolicy, Violation};
//!
//! let transformer = Transformer::builder()
//!     .on_unknown_action(UnknownActionPolicy::Reject)
//!     .max_actions(1)
//!     .build();
//!
//! let actions = vec![Action::clear(), Action::unknown("noop")];
//! let error = transformer.run(&State::new(), &actions).unwrap_err();
//!
//! assert_eq!(error.violations().len(), 2);
//! assert!(matches!(error.violations()[1], Violation::UnknownAction { index: 1, .. }));
//! ```

pub mod builder;
pub mod violations;

pub use builder::TransformerBuilder;
pub use violations::{TransformError, UnknownActionPolicy, Violation};

use crate::core::{transform, Action, State, StateHistory};
use crate::json::{self, JsonError};
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Runs transforms under a fixed configuration.
///
/// The default transformer accepts every well-typed input and behaves
/// exactly like `core::transform`.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    pub(crate) unknown_actions: UnknownActionPolicy,
    pub(crate) max_actions: Option<usize>,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> TransformerBuilder {
        TransformerBuilder::new()
    }

    pub fn unknown_action_policy(&self) -> UnknownActionPolicy {
        self.unknown_actions
    }

    pub fn action_limit(&self) -> Option<usize> {
        self.max_actions
    }

    /// Check the configured rules, then transform.
    ///
    /// Returns `TransformError::Rejected` with every violation if any rule
    /// fails. No snapshot is produced for a rejected call.
    pub fn run(&self, initial: &State, actions: &[Action]) -> Result<StateHistory, TransformError> {
        if let Validation::Failure(violations) = self.check(actions) {
            let violations: Vec<Violation> = violations.iter().cloned().collect();
            tracing::debug!(violations = violations.len(), "Transform rejected");
            return Err(TransformError::Rejected(violations));
        }

        if self.unknown_actions == UnknownActionPolicy::PassThroughAndLog {
            for (index, action) in actions.iter().enumerate() {
                if !action.is_recognized() {
                    tracing::warn!(
                        index,
                        kind = action.kind(),
                        "Passing through unrecognized action"
                    );
                }
            }
        }

        Ok(transform(initial, actions))
    }

    /// Decode untyped JSON input, then `run` it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use state_history::transformer::Transformer;
    /// use serde_json::json;
    ///
    /// let history = Transformer::new()
    ///     .run_json(
    ///         &json!({ "a": 1, "b": 2 }),
    ///         &json!([{ "type": "removeProperties", "keysToRemove": ["a"] }]),
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(history[0].to_value(), json!({ "b": 2 }));
    /// ```
    pub fn run_json(&self, initial: &Value, actions: &Value) -> Result<StateHistory, JsonError> {
        let initial = json::parse_state(initial)?;
        let actions = json::parse_actions(actions)?;
        Ok(self.run(&initial, &actions)?)
    }

    /// Evaluate every rule, accumulating ALL violations.
    fn check(&self, actions: &[Action]) -> Validation<(), NonEmptyVec<Violation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<Violation>>> = Vec::new();

        if let Some(limit) = self.max_actions {
            let check = if actions.len() > limit {
                Validation::fail(Violation::TooManyActions {
                    limit,
                    received: actions.len(),
                })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        if self.unknown_actions == UnknownActionPolicy::Reject {
            for (index, action) in actions.iter().enumerate() {
                if let Action::Unknown { kind } = action {
                    checks.push(Validation::fail(Violation::UnknownAction {
                        index,
                        kind: kind.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
