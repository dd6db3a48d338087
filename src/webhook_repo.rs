// Outbound webhook client (Mattermost-compatible incoming webhooks)

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use crate::config::WebhookConfig;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status; body is whatever
    /// error text it returned, often a JSON blob naming the bad field.
    #[error("webhook rejected post: HTTP {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Incoming-webhook payload. Username and channel override the hook's
/// server-side defaults and are omitted from the JSON when unset.
#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
}

pub struct WebhookRepo {
    client: reqwest::Client,
    url: String,
    username: Option<String>,
    channel: Option<String>,
}

impl WebhookRepo {
    pub fn new(config: &WebhookConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
            username: config.username.clone(),
            channel: config.channel.clone(),
        })
    }

    /// Post a markdown message to the webhook. One attempt only; the
    /// caller decides what a failed delivery means.
    #[instrument(skip(self, text), fields(repo = "webhook", operation = "post_text", text_len = text.len()))]
    pub async fn post_text(&self, text: &str) -> Result<(), WebhookError> {
        let payload = WebhookPayload {
            text,
            username: self.username.as_deref(),
            channel: self.channel.as_deref(),
        };

        let response = self.client.post(&self.url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookError::Rejected { status, body });
        }

        tracing::debug!("Webhook post delivered");
        Ok(())
    }
}
