use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::NotifyError;
use crate::message::Message;

/// Delivery target for finished notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one notification; a single attempt, no retry.
    async fn send(&self, message: &Message) -> Result<(), NotifyError>;
}

/// Posts notifications to an incoming-webhook URL.
pub struct WebhookClient {
    url: String,
    client: reqwest::Client,
}

impl WebhookClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookClient {
    async fn send(&self, message: &Message) -> Result<(), NotifyError> {
        let body =
            serde_json::to_vec(message).map_err(|err| NotifyError::Dispatch(err.to_string()))?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| NotifyError::Dispatch(err.to_string()))?;

        // The response is not interpreted; drain it so the connection is
        // released. A drain failure is logged, not escalated.
        if let Err(err) = response.bytes().await {
            log::warn!("Failed to drain webhook response: {err}");
        }

        Ok(())
    }
}
