//! Macros for ergonomic state construction.

/// Build a `State` from `key => value` pairs.
///
/// Values can be anything convertible into `serde_json::Value`. Keys are
/// inserted in the order written.
///
/// # Example
///
/// ```
/// use state_history::state;
/// use serde_json::json;
///
/// let empty = state! {};
/// assert!(empty.is_empty());
///
/// let state = state! {
///     "name" => "ada",
///     "visits" => 3,
///     "tags" => json!(["admin"]),
/// };
///
/// assert_eq!(state.keys().collect::<Vec<_>>(), vec!["name", "visits", "tags"]);
/// ```
#[macro_export]
macro_rules! state {
    () => {
        $crate::core::State::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::core::State::new()
            $(.with($key, $value))+
    };
}
