//! Companion browser extension detection.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::infrastructure::extension::ExtensionMessenger;

const PING_MESSAGE_TYPE: &str = "PING";

/// Detects whether the companion browser extension is installed.
pub struct BrowserExtensionService<M: ExtensionMessenger> {
    messenger: Arc<M>,
    extension_id: Option<String>,
}

impl<M: ExtensionMessenger> BrowserExtensionService<M> {
    pub fn new(messenger: Arc<M>, extension_id: Option<String>) -> Self {
        Self {
            messenger,
            extension_id: extension_id.filter(|id| !id.is_empty()),
        }
    }

    /// Whether detection is possible: the host supports messaging and an
    /// extension id is configured.
    pub fn is_supported(&self) -> bool {
        self.messenger.is_supported() && self.extension_id.is_some()
    }

    /// Pings the extension. Any non-null reply means it is installed.
    pub async fn is_installed(&self) -> bool {
        let Some(extension_id) = self.extension_id.as_deref() else {
            return false;
        };
        if !self.messenger.is_supported() {
            return false;
        }

        let reply = self
            .messenger
            .send_message(extension_id, json!({ "message": PING_MESSAGE_TYPE }))
            .await;
        let installed = reply.is_some_and(|r| !r.is_null());

        debug!(installed, "Extension ping answered");
        installed
    }

    /// Whether to advertise the extension: supported but not yet installed.
    pub async fn should_show_promo(&self) -> bool {
        self.is_supported() && !self.is_installed().await
    }
}
