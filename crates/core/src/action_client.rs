// crates/core/src/action_client.rs

//! Client for the dashboard's single `api.php` entry point.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use serde_json::Value;

use crate::types::{ActionResponse, SmokeConfig};

/// Abstract transport for query-selected API actions.
///
/// The runner only talks to this trait, so a stub can stand in for the
/// network.
pub trait ActionClient {
    /// Full URL of `action` on this client's entry point.
    fn endpoint(&self, action: &str) -> Result<String>;

    /// POST `body` as JSON and decode the response body as JSON.
    fn post_json(&self, url: &str, body: &Value) -> Result<ActionResponse>;
}

/// Blocking HTTP implementation backed by `reqwest`.
pub struct HttpActionClient {
    client: Client,
    base_url: String,
}

impl HttpActionClient {
    pub fn new(config: &SmokeConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl ActionClient for HttpActionClient {
    fn endpoint(&self, action: &str) -> Result<String> {
        let url = Url::parse_with_params(&self.base_url, &[("action", action)])
            .with_context(|| format!("invalid API base URL {:?}", self.base_url))?;
        Ok(url.to_string())
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<ActionResponse> {
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .with_context(|| format!("request to {} failed", url))?;

        // Non-2xx is still a reportable response.
        let status = resp.status().as_u16();
        let raw_text = resp.text().context("failed to read response body")?;

        let body: Value = serde_json::from_str(&raw_text).with_context(|| {
            format!(
                "response from {} is not JSON (HTTP {}): {}",
                url,
                status,
                preview(&raw_text, 200)
            )
        })?;

        Ok(ActionResponse { status, body })
    }
}

fn preview(s: &str, max: usize) -> String {
    let trimmed = s.trim();
    match trimmed.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
