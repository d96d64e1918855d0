//! Snapshot history.
//!
//! Provides the immutable, ordered record of every state produced by a
//! transform, following functional programming principles.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Ordered history of state snapshots.
///
/// Index *i* holds the state after the *i*-th action. History is
/// immutable from the outside - the `record` method returns a new history
/// with the snapshot added.
///
/// # Example
///
/// ```rust
/// use state_history::core::{State, StateHistory};
///
/// let history = StateHistory::new();
/// let history = history.record(State::new().with("a", 1));
/// let history = history.record(State::new());
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[0].get("a"), Some(&serde_json::json!(1)));
/// assert!(history.latest().unwrap().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateHistory {
    snapshots: Vec<State>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, snapshot: State) {
        self.snapshots.push(snapshot);
    }

    /// Record a snapshot, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the snapshot appended.
    ///
    /// # Example
    ///
    /// ```rust
    /// use state_history::core::{State, StateHistory};
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(State::new().with("a", 1));
    ///
    /// assert_eq!(new_history.len(), 1);
    /// assert_eq!(history.len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, snapshot: State) -> Self {
        let mut snapshots = self.snapshots.clone();
        snapshots.push(snapshot);
        Self { snapshots }
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&State> {
        self.snapshots.get(index)
    }

    /// The state after the last action, if any action was applied.
    pub fn latest(&self) -> Option<&State> {
        self.snapshots.last()
    }

    /// All snapshots in order.
    pub fn snapshots(&self) -> &[State] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.snapshots.iter()
    }

    pub fn into_snapshots(self) -> Vec<State> {
        self.snapshots
    }
}

impl Index<usize> for StateHistory {
    type Output = State;

    fn index(&self, index: usize) -> &State {
        &self.snapshots[index]
    }
}

impl FromIterator<State> for StateHistory {
    fn from_iter<I: IntoIterator<Item = State>>(iter: I) -> Self {
        Self {
            snapshots: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StateHistory {
    type Item = State;
    type IntoIter = std::vec::IntoIter<State>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.into_iter()
    }
}

impl<'a> IntoIterator for &'a StateHistory {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
        assert!(history.get(0).is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(State::new().with("a", 1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn record_preserves_order() {
        let history = StateHistory::new()
            .record(State::new().with("step", 1))
            .record(State::new().with("step", 2))
            .record(State::new().with("step", 3));

        let steps: Vec<_> = history.iter().map(|s| s.get("step").cloned()).collect();
        assert_eq!(steps, vec![Some(json!(1)), Some(json!(2)), Some(json!(3))]);
        assert_eq!(history.latest().unwrap().get("step"), Some(&json!(3)));
    }

    #[test]
    fn earlier_histories_keep_their_snapshots() {
        let first = StateHistory::new().record(State::new().with("a", 1));
        let second = first.record(State::new().with("a", 2));

        assert_eq!(first[0], State::new().with("a", 1));
        assert_eq!(second[0], first[0]);
        assert_eq!(second[1], State::new().with("a", 2));
    }

    #[test]
    fn collects_from_iterator() {
        let history: StateHistory = (0..3).map(|i| State::new().with("i", i)).collect();

        assert_eq!(history.len(), 3);
        assert_eq!(history.into_snapshots()[2], State::new().with("i", 2));
    }

    #[test]
    fn history_serializes_as_array() {
        let history = StateHistory::new()
            .record(State::new().with("a", 1))
            .record(State::new());

        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json, json!([{ "a": 1 }, {}]));

        let deserialized: StateHistory = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, history);
    }
}
