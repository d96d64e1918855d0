//! Actions describing a single state transition.

use super::state::State;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

pub(crate) const ADD_PROPERTIES: &str = "addProperties";
pub(crate) const REMOVE_PROPERTIES: &str = "removeProperties";
pub(crate) const CLEAR: &str = "clear";

/// Errors raised while decoding an action from its wire shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Action is missing its `type` tag")]
    MissingType,

    #[error("Action `{kind}` requires the `{field}` payload field")]
    MissingPayload {
        kind: &'static str,
        field: &'static str,
    },

    #[error("Malformed action: {0}")]
    Malformed(String),
}

/// A tagged instruction describing one state transition.
///
/// On the wire an action is an object with a `type` tag and variant-specific
/// camelCase payload fields:
///
/// ```json
/// { "type": "addProperties", "extraData": { "a": 1 } }
/// { "type": "removeProperties", "keysToRemove": ["a"] }
/// { "type": "clear" }
/// ```
///
/// Any other tag, including a non-string one, decodes to `Action::Unknown`
/// and its payload is ignored whatever its shape.
///
/// # Example
///
/// ```rust
/// use state_history::core::{Action, State};
/// use serde_json::json;
///
/// let action: Action = serde_json::from_value(json!({
///     "type": "addProperties",
///     "extraData": { "b": 2 }
/// }))
/// .unwrap();
///
/// assert_eq!(action, Action::add_properties(State::new().with("b", 2)));
/// assert_eq!(action.kind(), "addProperties");
///
/// let other: Action = serde_json::from_value(json!({ "type": "rename" })).unwrap();
/// assert!(!other.is_recognized());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum Action {
    /// Shallow-merge `extra_data` into the current state
    AddProperties { extra_data: State },

    /// Delete the listed keys from a copy of the current state
    RemoveProperties { keys_to_remove: Vec<String> },

    /// Replace the current state with an empty one
    Clear,

    /// Unrecognized tag; passes the current state through as a copy
    Unknown { kind: String },
}

impl Action {
    pub fn add_properties(extra_data: State) -> Self {
        Self::AddProperties { extra_data }
    }

    pub fn remove_properties<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self::RemoveProperties {
            keys_to_remove: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn clear() -> Self {
        Self::Clear
    }

    pub fn unknown(kind: impl Into<String>) -> Self {
        Self::Unknown { kind: kind.into() }
    }

    /// The wire tag of this action.
    pub fn kind(&self) -> &str {
        match self {
            Self::AddProperties { .. } => ADD_PROPERTIES,
            Self::RemoveProperties { .. } => REMOVE_PROPERTIES,
            Self::Clear => CLEAR,
            Self::Unknown { kind } => kind.as_str(),
        }
    }

    /// Whether the tag selects one of the three real transitions.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unknown { .. })
    }
}

/// Wire shape of an action before its tag is resolved.
///
/// Payload fields stay untyped until the tag selects the arm that reads
/// them, so a stray payload of any shape never fails an action that
/// ignores it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub(crate) struct RawAction {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) kind: Option<Value>,

    #[serde(
        rename = "extraData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) extra_data: Option<Value>,

    #[serde(
        rename = "keysToRemove",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) keys_to_remove: Option<Value>,
}

/// Keep an explicit `null` tag as `Some(Value::Null)`; only an absent
/// field decodes to `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn payload<T: DeserializeOwned>(
    value: Option<Value>,
    kind: &'static str,
    field: &'static str,
) -> Result<T, ActionError> {
    let value = value.ok_or(ActionError::MissingPayload { kind, field })?;
    serde_json::from_value(value)
        .map_err(|error| ActionError::Malformed(format!("`{field}` of `{kind}`: {error}")))
}

impl TryFrom<RawAction> for Action {
    type Error = ActionError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let kind = match raw.kind.ok_or(ActionError::MissingType)? {
            Value::String(kind) => kind,
            // A non-string tag never matches a recognized one
            other => return Ok(Self::Unknown { kind: other.to_string() }),
        };
        match kind.as_str() {
            ADD_PROPERTIES => Ok(Self::AddProperties {
                extra_data: payload(raw.extra_data, ADD_PROPERTIES, "extraData")?,
            }),
            REMOVE_PROPERTIES => Ok(Self::RemoveProperties {
                keys_to_remove: payload(raw.keys_to_remove, REMOVE_PROPERTIES, "keysToRemove")?,
            }),
            CLEAR => Ok(Self::Clear),
            _ => Ok(Self::Unknown { kind }),
        }
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        match action {
            Action::AddProperties { extra_data } => Self {
                kind: Some(Value::from(ADD_PROPERTIES)),
                extra_data: Some(extra_data.to_value()),
                keys_to_remove: None,
            },
            Action::RemoveProperties { keys_to_remove } => Self {
                kind: Some(Value::from(REMOVE_PROPERTIES)),
                extra_data: None,
                keys_to_remove: Some(Value::from(keys_to_remove)),
            },
            Action::Clear => Self {
                kind: Some(Value::from(CLEAR)),
                ..Self::default()
            },
            Action::Unknown { kind } => Self {
                kind: Some(Value::String(kind)),
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<Action, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn kind_reports_wire_tag() {
        assert_eq!(Action::add_properties(State::new()).kind(), "addProperties");
        assert_eq!(
            Action::remove_properties(["a"]).kind(),
            "removeProperties"
        );
        assert_eq!(Action::clear().kind(), "clear");
        assert_eq!(Action::unknown("noop").kind(), "noop");
    }

    #[test]
    fn is_recognized_excludes_unknown() {
        assert!(Action::clear().is_recognized());
        assert!(Action::remove_properties(Vec::<String>::new()).is_recognized());
        assert!(!Action::unknown("noop").is_recognized());
    }

    #[test]
    fn decodes_every_recognized_tag() {
        assert_eq!(
            decode(json!({ "type": "addProperties", "extraData": { "a": 1 } })).unwrap(),
            Action::add_properties(State::new().with("a", 1))
        );
        assert_eq!(
            decode(json!({ "type": "removeProperties", "keysToRemove": ["a", "b"] })).unwrap(),
            Action::remove_properties(["a", "b"])
        );
        assert_eq!(decode(json!({ "type": "clear" })).unwrap(), Action::Clear);
    }

    #[test]
    fn unrecognized_tag_ignores_payload() {
        let action = decode(json!({ "type": "rename", "extraData": { "a": 1 } })).unwrap();
        assert_eq!(action, Action::unknown("rename"));
    }

    #[test]
    fn clear_ignores_stray_payload() {
        let action = decode(json!({ "type": "clear", "keysToRemove": ["a"] })).unwrap();
        assert_eq!(action, Action::Clear);
    }

    #[test]
    fn unrecognized_tag_ignores_mistyped_payload() {
        let action = decode(json!({ "type": "rename", "extraData": 5 })).unwrap();
        assert_eq!(action, Action::unknown("rename"));

        let action = decode(json!({ "type": "noop", "keysToRemove": [1] })).unwrap();
        assert_eq!(action, Action::unknown("noop"));
    }

    #[test]
    fn clear_ignores_mistyped_payload() {
        let action = decode(json!({ "type": "clear", "keysToRemove": "x" })).unwrap();
        assert_eq!(action, Action::Clear);
    }

    #[test]
    fn non_string_tag_is_unrecognized() {
        assert_eq!(decode(json!({ "type": 5 })).unwrap(), Action::unknown("5"));
        assert_eq!(decode(json!({ "type": null })).unwrap(), Action::unknown("null"));
        assert_eq!(
            decode(json!({ "type": ["clear"] })).unwrap(),
            Action::unknown(r#"["clear"]"#)
        );
    }

    #[test]
    fn mistyped_payload_of_recognized_tag_is_malformed() {
        let raw: RawAction =
            serde_json::from_value(json!({ "type": "addProperties", "extraData": 5 })).unwrap();
        assert!(matches!(Action::try_from(raw), Err(ActionError::Malformed(_))));

        let raw: RawAction =
            serde_json::from_value(json!({ "type": "removeProperties", "keysToRemove": [1] }))
                .unwrap();
        assert!(matches!(Action::try_from(raw), Err(ActionError::Malformed(_))));
    }

    #[test]
    fn missing_type_is_rejected() {
        let raw: RawAction = serde_json::from_value(json!({ "extraData": {} })).unwrap();
        assert_eq!(Action::try_from(raw), Err(ActionError::MissingType));
    }

    #[test]
    fn missing_payload_is_rejected() {
        let raw: RawAction = serde_json::from_value(json!({ "type": "addProperties" })).unwrap();
        assert_eq!(
            Action::try_from(raw),
            Err(ActionError::MissingPayload {
                kind: "addProperties",
                field: "extraData",
            })
        );

        let raw: RawAction =
            serde_json::from_value(json!({ "type": "removeProperties" })).unwrap();
        assert_eq!(
            Action::try_from(raw),
            Err(ActionError::MissingPayload {
                kind: "removeProperties",
                field: "keysToRemove",
            })
        );
    }

    #[test]
    fn deserialize_surfaces_payload_errors() {
        let err = decode(json!({ "type": "removeProperties" })).unwrap_err();
        assert!(err.to_string().contains("keysToRemove"));
    }

    #[test]
    fn serializes_to_wire_shape() {
        let json = serde_json::to_value(Action::remove_properties(["a"])).unwrap();
        assert_eq!(json, json!({ "type": "removeProperties", "keysToRemove": ["a"] }));

        let json = serde_json::to_value(Action::clear()).unwrap();
        assert_eq!(json, json!({ "type": "clear" }));
    }
}
