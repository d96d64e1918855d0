//! Core state reducer types and logic.
//!
//! This module contains the pure functional core:
//! - `State` snapshots with shallow-copy semantics
//! - `Action` tagged transitions
//! - The immutable `StateHistory`
//! - `apply` and `transform`, the single step and the fold
//!
//! All logic in this module is pure (no side effects beyond logging),
//! following the "pure core, imperative shell" philosophy.

mod action;
mod history;
mod state;
mod transform;

pub(crate) use action::RawAction;
pub use action::{Action, ActionError};
pub use history::StateHistory;
pub use state::{SharedValue, State};
pub use transform::{apply, transform};
