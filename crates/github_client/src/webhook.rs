//! Repository webhook types.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;

/// A webhook configured on a repository.
///
/// # Examples
///
/// ```rust
/// use github_client::Webhook;
///
/// let webhook: Webhook = serde_json::from_str(r#"{
///     "id": 12345,
///     "active": true,
///     "events": ["push"],
///     "config": {
///         "url": "https://example.com/webhook",
///         "content_type": "json"
///     }
/// }"#).unwrap();
///
/// assert_eq!(webhook.target_url(), "https://example.com/webhook");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Host-assigned webhook ID
    pub id: u64,

    /// Whether the webhook is active
    #[serde(default)]
    pub active: bool,

    /// Delivery configuration
    pub config: WebhookConfig,
}

impl Webhook {
    /// Returns the URL the webhook delivers to.
    pub fn target_url(&self) -> &str {
        &self.config.url
    }
}

/// Delivery configuration of a webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Target URL for deliveries
    pub url: String,

    /// Payload content type ("json" or "form")
    #[serde(default)]
    pub content_type: Option<String>,
}
