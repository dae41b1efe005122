//! Extension messenger trait.

use async_trait::async_trait;
use serde_json::Value;

/// Sends one-shot messages to a browser extension by id.
///
/// `send_message` resolves to the extension's reply, or `None` when nothing
/// answered (extension missing, disabled, or not listening).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExtensionMessenger: Send + Sync {
    /// Whether the host can talk to extensions at all.
    fn is_supported(&self) -> bool;

    async fn send_message(&self, extension_id: &str, message: Value) -> Option<Value>;
}
