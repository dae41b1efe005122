//! View layer: store subscribers that project state for presentation.
//!
//! - [`home`] - the short-link form: view model, renderer trait and controller
//! - [`terminal`] - a [`home::HomeRenderer`] printing changes to the terminal

pub mod home;
pub mod terminal;

pub use home::{CreateOutcome, HomeController, HomeRenderer, HomeView, SignInLink};
pub use terminal::TerminalRenderer;
