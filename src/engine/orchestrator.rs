// * Extraction Orchestrator
// * Runs the tiers in fixed priority order: rendered DOM, static HTML, then
// * script mining. A tier's failure is swallowed and the ladder advances; no
// * tier runs twice. The caller sees the first success or one aggregate error.

use std::time::Instant;

use tracing::{info, warn};

use crate::config::Settings;
use crate::engine::demo;
use crate::engine::rendered::RenderedDomStrategy;
use crate::engine::script_mining::ScriptMiningStrategy;
use crate::engine::static_html::StaticHtmlStrategy;
use crate::engine::validation::validate_post_url;
use crate::model::{ExtractRequest, ExtractedContent};
use crate::network::errors::ExtractError;
use crate::ops::telemetry::{EXTRACTIONS_TOTAL, EXTRACT_DURATION_SECONDS};

pub struct ExtractionPipeline {
    rendered: RenderedDomStrategy,
    static_html: StaticHtmlStrategy,
    script_mining: ScriptMiningStrategy,
}

impl ExtractionPipeline {
    // * The rendering credential arrives through Settings; nothing here reads
    // * the environment directly.
    pub fn new(settings: &Settings) -> Result<Self, ExtractError> {
        Ok(Self {
            rendered: RenderedDomStrategy::new(settings.render_api_key.clone())?,
            static_html: StaticHtmlStrategy::new()?,
            script_mining: ScriptMiningStrategy::new()?,
        })
    }

    pub async fn extract(
        &self,
        request: &ExtractRequest,
    ) -> Result<ExtractedContent, ExtractError> {
        if request.demo_mode {
            info!("Demo mode requested, returning sample content");
            return Ok(demo::sample_content());
        }

        // * Terminal: foreign or malformed URLs never reach a tier
        let url = validate_post_url(&request.url)?;
        let url = url.as_str();

        // --- TIER 1: Rendered DOM ---
        match self.timed_attempt("rendered", self.rendered.attempt(url)).await {
            Ok(content) => return Ok(content),
            Err(e) => warn!(url, error = %e, "Rendered-DOM tier failed, falling through"),
        }

        // --- TIER 2: Static HTML ---
        match self
            .timed_attempt("static_html", self.static_html.attempt(url))
            .await
        {
            Ok(content) => return Ok(content),
            Err(e) => warn!(url, error = %e, "Static-HTML tier failed, falling through"),
        }

        // --- TIER 3: Script mining ---
        match self
            .timed_attempt("script_mining", self.script_mining.attempt(url))
            .await
        {
            Ok(content) => return Ok(content),
            Err(e) => warn!(url, error = %e, "Script-mining tier failed"),
        }

        EXTRACTIONS_TOTAL
            .with_label_values(&["pipeline", "all_failed"])
            .inc();
        Err(ExtractError::AllFailed(url.to_string()))
    }

    async fn timed_attempt(
        &self,
        tier: &'static str,
        attempt: impl std::future::Future<Output = Result<ExtractedContent, ExtractError>>,
    ) -> Result<ExtractedContent, ExtractError> {
        let started = Instant::now();
        let outcome = attempt.await;

        EXTRACT_DURATION_SECONDS
            .with_label_values(&[tier])
            .observe(started.elapsed().as_secs_f64());
        let status = if outcome.is_ok() { "success" } else { "failure" };
        EXTRACTIONS_TOTAL.with_label_values(&[tier, status]).inc();

        if let Ok(content) = &outcome {
            info!(
                tier,
                images = content.images.len(),
                videos = content.videos.len(),
                documents = content.documents.len(),
                "Extraction succeeded"
            );
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> ExtractionPipeline {
        ExtractionPipeline::new(&Settings::without_rendering(0)).unwrap()
    }

    #[tokio::test]
    async fn test_demo_mode_bypasses_validation_and_network() {
        let request = ExtractRequest {
            url: "not even a url".into(),
            demo_mode: true,
        };
        let content = pipeline().extract(&request).await.unwrap();
        assert_eq!(content, demo::sample_content());
    }

    #[tokio::test]
    async fn test_invalid_url_is_terminal() {
        let request = ExtractRequest {
            url: "https://example.com/posts/x".into(),
            demo_mode: false,
        };
        let err = pipeline().extract(&request).await.unwrap_err();
        assert!(matches!(err, ExtractError::InvalidInput(_)));
    }
}
