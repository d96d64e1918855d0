//! State History: a pure sequential state reducer
//!
//! Given an initial state and an ordered list of actions, State History
//! produces every intermediate state obtained by applying the actions in
//! turn. Neither the input state nor any produced snapshot is ever mutated.
//!
//! The crate follows a "pure core, imperative shell" layout. The core fold
//! is a pure function; configuration, rule checking and JSON decoding sit
//! around it.
//!
//! # Core Concepts
//!
//! - **State**: Ordered string-keyed map with shallow-copy semantics via `State`
//! - **Action**: Tagged transition (`addProperties`, `removeProperties`,
//!   `clear`, anything else passes through) via `Action`
//! - **History**: One immutable snapshot per action via `StateHistory`
//! - **Transformer**: Configured shell that checks rules before folding
//!
//! # Shallow Copies
//!
//! Each snapshot owns its top-level map, but nested values are held in
//! `Arc` and shared between snapshots. Deriving a snapshot never deep-clones.
//!
//! # Example
//!
//! ```rust
//! use state_history::core::{transform, Action};
//! use state_history::state;
//!
//! let initial = state! { "a" => 1, "b" => 2 };
//! let actions = vec![
//!     Action::add_properties(state! { "c" => 3 }),
//!     Action::remove_properties(["a"]),
//!     Action::unknown("noop"),
//!     Action::clear(),
//! ];
//!
//! let history = transform(&initial, &actions);
//!
//! assert_eq!(history.len(), 4);
//! assert_eq!(history[0], state! { "a" => 1, "b" => 2, "c" => 3 });
//! assert_eq!(history[1], state! { "b" => 2, "c" => 3 });
//! assert_eq!(history[2], history[1]);
//! assert!(history[3].is_empty());
//! assert_eq!(initial, state! { "a" => 1, "b" => 2 });
//! ```

pub mod core;
pub mod json;
pub mod macros;
pub mod transformer;

// Re-export commonly used types
pub use crate::core::{apply, transform, Action, ActionError, SharedValue, State, StateHistory};
pub use crate::json::{transform_json, JsonError};
pub use crate::transformer::{TransformError, Transformer, UnknownActionPolicy};
