use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde_json::json;

use tally_core::error::{Result, TallyError};

use super::NotificationSink;

/// Upper bound on a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Posts hit announcements to a webhook URL (Discord-compatible payload).
pub struct WebhookSink {
    url: String,
    client: reqwest::Client,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TallyError::Internal(format!("webhook client: {e}")))?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    async fn notify(&self, key: &str, new_count: u64) -> Result<()> {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let body = json!({
            "content": format!("Hit count for {key}: {new_count} at <t:{ts}:f>"),
        });

        let resp = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TallyError::Notify(format!("webhook send: {e}")))?;

        if !resp.status().is_success() {
            return Err(TallyError::Notify(format!(
                "webhook status {}",
                resp.status()
            )));
        }
        Ok(())
    }
}
