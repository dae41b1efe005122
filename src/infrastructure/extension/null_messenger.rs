//! No-op extension messenger.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::messenger::ExtensionMessenger;

/// A messenger for hosts with no extension runtime, such as a terminal.
///
/// Reports messaging as unsupported and never receives a reply.
pub struct NullExtensionMessenger;

impl NullExtensionMessenger {
    pub fn new() -> Self {
        debug!("Using NullExtensionMessenger (extension messaging unavailable)");
        Self
    }
}

impl Default for NullExtensionMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExtensionMessenger for NullExtensionMessenger {
    fn is_supported(&self) -> bool {
        false
    }

    async fn send_message(&self, _extension_id: &str, _message: Value) -> Option<Value> {
        None
    }
}
