//! Decoding untyped JSON input and rendering histories back to JSON.
//!
//! This is the validation layer for callers that receive state and actions
//! as structured text. Every element of an action array is checked and all
//! problems are reported together, each tagged with its index. Nothing is
//! transformed unless the whole input decodes.

use crate::core::{Action, ActionError, RawAction, State, StateHistory};
use crate::transformer::Transformer;
use serde::Deserialize;
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ActionIssue, JsonError};

/// Decode an initial state from a JSON object.
pub fn parse_state(value: &Value) -> Result<State, JsonError> {
    match value {
        Value::Object(map) => Ok(State::from(map.clone())),
        other => Err(JsonError::StateNotObject {
            found: kind_of(other),
        }),
    }
}

/// Decode an ordered list of actions from a JSON array.
///
/// # Example
///
/// ```rust
/// use state_history::json::{parse_actions, JsonError};
/// use serde_json::json;
///
/// let actions = parse_actions(&json!([{ "type": "clear" }, { "type": "noop" }])).unwrap();
/// assert_eq!(actions.len(), 2);
///
/// let error = parse_actions(&json!([
///     { "type": "addProperties" },
///     { "type": "clear" },
///     { "keysToRemove": ["a"] }
/// ]))
/// .unwrap_err();
///
/// match error {
///     JsonError::InvalidActions(issues) => {
///         assert_eq!(issues.len(), 2);
///         assert_eq!(issues[0].index, 0);
///         assert_eq!(issues[1].index, 2);
///     }
///     other => panic!("unexpected error: {other}"),
/// }
/// ```
pub fn parse_actions(value: &Value) -> Result<Vec<Action>, JsonError> {
    let Value::Array(elements) = value else {
        return Err(JsonError::ActionsNotArray {
            found: kind_of(value),
        });
    };

    let checks: Vec<Validation<Action, NonEmptyVec<ActionIssue>>> = elements
        .iter()
        .enumerate()
        .map(|(index, element)| match parse_action(element) {
            Ok(action) => Validation::success(action),
            Err(error) => Validation::fail(ActionIssue { index, error }),
        })
        .collect();

    match Validation::all_vec(checks) {
        Validation::Success(actions) => Ok(actions),
        Validation::Failure(issues) => {
            let issues: Vec<ActionIssue> = issues.iter().cloned().collect();
            tracing::warn!(
                invalid = issues.len(),
                total = elements.len(),
                "Rejected malformed actions"
            );
            Err(JsonError::InvalidActions(issues))
        }
    }
}

fn parse_action(element: &Value) -> Result<Action, ActionError> {
    let raw = RawAction::deserialize(element)
        .map_err(|error| ActionError::Malformed(error.to_string()))?;
    Action::try_from(raw)
}

/// Decode and transform with the default `Transformer`.
///
/// # Example
///
/// ```rust
/// use state_history::json::{render, transform_json};
/// use serde_json::json;
///
/// let history = transform_json(
///     &json!({ "a": 1 }),
///     &json!([
///         { "type": "addProperties", "extraData": { "b": 2 } },
///         { "type": "removeProperties", "keysToRemove": ["a"] }
///     ]),
/// )
/// .unwrap();
///
/// assert_eq!(render(&history).unwrap(), json!([{ "a": 1, "b": 2 }, { "b": 2 }]));
/// ```
pub fn transform_json(initial: &Value, actions: &Value) -> Result<StateHistory, JsonError> {
    Transformer::new().run_json(initial, actions)
}

/// Render a history as a JSON array of objects, keys in snapshot order.
pub fn render(history: &StateHistory) -> Result<Value, JsonError> {
    Ok(serde_json::to_value(history)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_state_requires_object() {
        let error = parse_state(&json!([1, 2])).unwrap_err();
        assert!(matches!(error, JsonError::StateNotObject { found: "array" }));

        let state = parse_state(&json!({ "a": 1 })).unwrap();
        assert_eq!(state, State::new().with("a", 1));
    }

    #[test]
    fn parse_actions_requires_array() {
        let error = parse_actions(&json!({ "type": "clear" })).unwrap_err();
        assert!(matches!(error, JsonError::ActionsNotArray { found: "object" }));
    }

    #[test]
    fn parse_actions_accepts_empty_array() {
        assert!(parse_actions(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn parse_actions_accumulates_all_issues() {
        let error = parse_actions(&json!([
            42,
            { "type": "removeProperties" },
            { "type": "clear" },
            { "extraData": {} },
            { "type": "addProperties", "extraData": [1] }
        ]))
        .unwrap_err();

        let JsonError::InvalidActions(issues) = error else {
            panic!("Expected InvalidActions");
        };

        let indices: Vec<usize> = issues.iter().map(|issue| issue.index).collect();
        assert_eq!(indices, vec![0, 1, 3, 4]);
        assert!(matches!(issues[0].error, ActionError::Malformed(_)));
        assert_eq!(
            issues[1].error,
            ActionError::MissingPayload {
                kind: "removeProperties",
                field: "keysToRemove",
            }
        );
        assert_eq!(issues[2].error, ActionError::MissingType);
        assert!(matches!(issues[3].error, ActionError::Malformed(_)));
    }

    #[test]
    fn invalid_actions_message_names_each_index() {
        let error = parse_actions(&json!([{ "type": "clear" }, {}])).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid actions: action 1: Action is missing its `type` tag"
        );
    }

    #[test]
    fn transform_json_rejects_before_transforming() {
        let error = transform_json(&json!("not a state"), &json!([])).unwrap_err();
        assert!(matches!(error, JsonError::StateNotObject { found: "string" }));
    }

    #[test]
    fn render_keeps_snapshot_key_order() {
        let history = transform_json(
            &json!({ "z": 1 }),
            &json!([{ "type": "addProperties", "extraData": { "a": 2 } }]),
        )
        .unwrap();

        let rendered = serde_json::to_string(&render(&history).unwrap()).unwrap();
        assert_eq!(rendered, r#"[{"z":1,"a":2}]"#);
    }
}
