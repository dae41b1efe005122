//! Central application state and its observer-based store.
//!
//! - [`AppState`] - the editing url, the last created url and current errors
//! - [`Action`] - the discrete events that change the state
//! - [`reduce`] - pure transition function from state and action to next state
//! - [`Store`] - owns the state, serializes dispatch and notifies subscribers
//!
//! # Dispatch Flow
//!
//! 1. A view calls [`Store::dispatch`] with an [`Action`]
//! 2. [`reduce`] computes the next state from a snapshot of the current one
//! 3. The store swaps the new state in
//! 4. Every subscriber is called synchronously with the new state

mod action;
mod reducer;
mod store;

pub use action::Action;
pub use reducer::reduce;
pub use store::{Listener, Store, SubscriptionId};

use crate::domain::entities::{DisplayError, Url};

/// Application state shared by the views.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Draft the user is editing.
    pub editing_url: Url,
    /// Last short link created in this session.
    pub created_url: Option<Url>,
    /// Inline validation message for the field that last lost focus.
    pub input_err: Option<String>,
    /// Error shown in the dismissible error dialog.
    pub err: Option<DisplayError>,
}
