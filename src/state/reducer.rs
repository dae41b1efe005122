//! State transition function.

use super::{Action, AppState};

/// Computes the state that follows `state` once `action` is applied.
///
/// Pure: the current state is left untouched.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::UpdateLongLink(long_link) => {
            next.editing_url.original_url = long_link;
        }
        Action::UpdateAlias(alias) => {
            next.editing_url.alias = Some(alias);
        }
        Action::UpdateCreatedUrl(url) => {
            next.created_url = Some(url);
            next.input_err = None;
            next.err = None;
        }
        Action::RaiseInputError(input_err) => {
            next.input_err = input_err;
        }
        Action::RaiseCreateShortLinkError(err) => {
            next.err = Some(err);
        }
        Action::ClearError => {
            next.err = None;
        }
    }

    next
}
