//! The sequential fold from an initial state and actions to a history.

use super::action::Action;
use super::history::StateHistory;
use super::state::State;

/// Apply one action to a state, returning the next state.
///
/// Pure: `state` is never modified and the result is always a new value,
/// including for `Action::Unknown`, which yields a shallow copy.
pub fn apply(state: &State, action: &Action) -> State {
    match action {
        Action::AddProperties { extra_data } => state.merge(extra_data),
        Action::RemoveProperties { keys_to_remove } => state.without(keys_to_remove.as_slice()),
        Action::Clear => State::new(),
        Action::Unknown { .. } => state.clone(),
    }
}

/// Apply `actions` in order, recording the state after each one.
///
/// The returned history has exactly one snapshot per action; the initial
/// state itself is never part of it. Each step reads only its immediate
/// predecessor.
///
/// # Example
///
/// ```rust
/// use state_history::core::{transform, Action, State};
///
/// let initial = State::new().with("a", 1);
/// let actions = vec![
///     Action::add_properties(State::new().with("b", 2)),
///     Action::remove_properties(["a"]),
/// ];
///
/// let history = transform(&initial, &actions);
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history[0], State::new().with("a", 1).with("b", 2));
/// assert_eq!(history[1], State::new().with("b", 2));
/// assert_eq!(initial, State::new().with("a", 1)); // Input unchanged
/// ```
pub fn transform(initial: &State, actions: &[Action]) -> StateHistory {
    tracing::debug!(
        actions = actions.len(),
        keys = initial.len(),
        "Transforming state"
    );

    let mut history = StateHistory::with_capacity(actions.len());
    for (index, action) in actions.iter().enumerate() {
        let next = apply(history.latest().unwrap_or(initial), action);
        tracing::trace!(index, kind = action.kind(), keys = next.len(), "Applied action");
        history.push(next);
    }

    tracing::debug!(snapshots = history.len(), "Transform complete");
    history
}
