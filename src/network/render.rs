use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::constants::{RENDER_TIMEOUT_MS, RENDER_WAIT_TIMEOUT_MS};
use crate::network::errors::ExtractError;

const RENDER_API_URL: &str = "https://app.scrapingbee.com/api/v1/";

// * Client for the remote browser-rendering service. The service executes the
// * page's scripts in a cloud browser session and returns the settled HTML;
// * dropping the in-flight request releases the session on every exit path.
pub struct RenderClient {
    http: Client,
    api_key: String,
}

impl RenderClient {
    pub fn new(api_key: String) -> Result<Self, ExtractError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(RENDER_TIMEOUT_MS))
            .build()
            .map_err(|e| ExtractError::RenderingFailed(e.to_string()))?;

        Ok(Self { http, api_key })
    }

    // * Renders `target` with client-side scripts executed, waiting (bounded)
    // * for `wait_selector` to appear before the HTML is captured.
    pub async fn render(&self, target: &str, wait_selector: &str) -> Result<String, ExtractError> {
        let wait_ms = RENDER_WAIT_TIMEOUT_MS.to_string();
        let request = self
            .http
            .get(RENDER_API_URL)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("url", target),
                ("render_js", "true"),
                ("wait_for", wait_selector),
                ("timeout", wait_ms.as_str()),
            ])
            .send();

        // * Outer bound in addition to the client timeout; a hung rendering
        // * session must not pin the request handler.
        let resp = tokio::time::timeout(Duration::from_millis(RENDER_TIMEOUT_MS), request)
            .await
            .map_err(|_| {
                ExtractError::RenderingFailed(format!("timed out after {}ms", RENDER_TIMEOUT_MS))
            })?
            .map_err(|e| ExtractError::RenderingFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ExtractError::RenderingFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        let html = resp
            .text()
            .await
            .map_err(|e| ExtractError::RenderingFailed(e.to_string()))?;

        debug!(bytes = html.len(), "Rendered HTML received");
        Ok(html)
    }
}
