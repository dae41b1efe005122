//! Messaging channel to the companion browser extension.
//!
//! Provides an [`ExtensionMessenger`] trait with one implementation:
//! - [`NullExtensionMessenger`] - for hosts without an extension runtime

mod messenger;
mod null_messenger;

pub use messenger::ExtensionMessenger;
pub use null_messenger::NullExtensionMessenger;

#[cfg(test)]
pub use messenger::MockExtensionMessenger;
