use crate::domain::entities::{DisplayError, Url};

/// Events that change [`super::AppState`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpdateLongLink(String),
    UpdateAlias(String),
    UpdateCreatedUrl(Url),
    /// Sets the inline input error; `None` clears it.
    RaiseInputError(Option<String>),
    RaiseCreateShortLinkError(DisplayError),
    ClearError,
}
