//! State snapshots.
//!
//! A `State` is an ordered mapping from string keys to shared JSON values.
//! Every operation that derives a new state copies only the top-level
//! entries; nested values are shared through `Arc`, so deriving a state is
//! cheap and never touches the state it was derived from.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// A value held by a state, shared between every snapshot that contains it.
pub type SharedValue = Arc<Value>;

/// Immutable-by-convention mapping of keys to values.
///
/// `Clone` is the shallow copy: the new state owns its own top-level map,
/// while nested values stay shared with the original.
///
/// Equality ignores key order. Enumeration and serialization follow
/// insertion order: existing keys keep their position on overwrite and new
/// keys are appended.
///
/// # Example
///
/// ```rust
/// use state_history::core::State;
///
/// let state = State::new().with("a", 1).with("b", "two");
///
/// assert_eq!(state.len(), 2);
/// assert_eq!(state.get("a"), Some(&serde_json::json!(1)));
/// assert_eq!(state.keys().collect::<Vec<_>>(), vec!["a", "b"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State {
    entries: IndexMap<String, SharedValue>,
}

impl State {
    /// Create an empty state.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Return this state with `key` set to `value`.
    ///
    /// Intended for construction. An existing key keeps its position.
    pub fn with(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_shared(key, Arc::new(value.into()))
    }

    /// Return this state with `key` bound to an already shared value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use state_history::core::State;
    /// use serde_json::json;
    /// use std::sync::Arc;
    ///
    /// let nested = Arc::new(json!({ "items": [1, 2, 3] }));
    /// let state = State::new().with_shared("nested", Arc::clone(&nested));
    ///
    /// assert!(Arc::ptr_eq(state.get_shared("nested").unwrap(), &nested));
    /// ```
    pub fn with_shared(mut self, key: impl Into<String>, value: SharedValue) -> Self {
        self.entries.insert(key.into(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).map(|value| value.as_ref())
    }

    /// Get the shared handle for `key`, for aliasing checks.
    pub fn get_shared(&self, key: &str) -> Option<&SharedValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shallow-merge `extra` over this state, returning a new state.
    ///
    /// Values from `extra` win on collision. Keys already present keep their
    /// position; keys new to this state are appended in `extra`'s order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use state_history::core::State;
    ///
    /// let base = State::new().with("a", 1).with("b", 2);
    /// let extra = State::new().with("c", 3).with("a", 9);
    ///
    /// let merged = base.merge(&extra);
    ///
    /// assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    /// assert_eq!(merged.get("a"), Some(&serde_json::json!(9)));
    /// assert_eq!(base.get("a"), Some(&serde_json::json!(1))); // Original unchanged
    /// ```
    pub fn merge(&self, extra: &State) -> State {
        let mut entries = self.entries.clone();
        for (key, value) in &extra.entries {
            entries.insert(key.clone(), Arc::clone(value));
        }
        Self { entries }
    }

    /// Copy this state without the listed keys, returning a new state.
    ///
    /// Keys that are not present are ignored. Remaining keys keep their
    /// relative order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use state_history::core::State;
    ///
    /// let state = State::new().with("a", 1).with("b", 2).with("c", 3);
    /// let trimmed = state.without(&["a", "missing"]);
    ///
    /// assert_eq!(trimmed.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    /// assert_eq!(state.len(), 3);
    /// ```
    pub fn without<K: AsRef<str>>(&self, keys: &[K]) -> State {
        let mut entries = self.entries.clone();
        for key in keys {
            entries.shift_remove(key.as_ref());
        }
        Self { entries }
    }

    /// Render as a plain JSON object in enumeration order.
    ///
    /// Unlike `Clone`, this copies nested values out of their shared handles.
    pub fn to_value(&self) -> Value {
        let map = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value.as_ref().clone()))
            .collect::<Map<String, Value>>();
        Value::Object(map)
    }
}

impl From<Map<String, Value>> for State {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for State {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), Arc::new(value)))
            .collect();
        Self { entries }
    }
}
