// * Tier 1 - Rendered-DOM Strategy
// * Asks the remote rendering service for the fully rendered page (scripts
// * executed) and mines the settled DOM. Skips itself when no credential is
// * configured so cheaper tiers still run.

use scraper::Html;
use tracing::debug;

use crate::config::constants::{NO_TEXT_PLACEHOLDER, RENDER_WAIT_SELECTOR};
use crate::model::ExtractedContent;
use crate::network::errors::ExtractError;
use crate::network::render::RenderClient;
use crate::refinery::collector::MediaCollector;
use crate::refinery::selectors;

pub struct RenderedDomStrategy {
    client: Option<RenderClient>,
}

impl RenderedDomStrategy {
    pub fn new(render_api_key: Option<String>) -> Result<Self, ExtractError> {
        let client = match render_api_key {
            Some(key) => Some(RenderClient::new(key)?),
            None => None,
        };
        Ok(Self { client })
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    pub async fn attempt(&self, url: &str) -> Result<ExtractedContent, ExtractError> {
        let client = self.client.as_ref().ok_or(ExtractError::Unconfigured)?;

        let html = client.render(url, RENDER_WAIT_SELECTOR).await?;
        debug!(url, bytes = html.len(), "Mining rendered DOM");

        mine_rendered_html(&html)
    }
}

// * Sync DOM pass so the non-Send parse tree never crosses an await point.
pub fn mine_rendered_html(html: &str) -> Result<ExtractedContent, ExtractError> {
    let doc = Html::parse_document(html);

    let text = selectors::extract_post_text(&doc).or_else(|| selectors::page_fallback_text(&doc));

    let mut collector = MediaCollector::new();
    selectors::harvest_media(&doc, &mut collector);

    if text.is_none() && collector.is_empty() {
        return Err(ExtractError::NoContent("rendered DOM yielded nothing"));
    }

    Ok(collector.into_content(text.unwrap_or_else(|| NO_TEXT_PLACEHOLDER.to_string())))
}
