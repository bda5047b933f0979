// * Tier 2 - Static-HTML Strategy
// * Plain GET with a rotated browser identity, no script execution. Runs the
// * same selector cascade as the rendered tier against the raw markup, so
// * client-rendered sections are expected to be missing; this tier is the
// * cheaper fallback, not a replacement.

use scraper::Html;
use tracing::debug;

use crate::config::constants::{MAX_STATIC_IMAGES, NO_TEXT_PLACEHOLDER};
use crate::model::ExtractedContent;
use crate::network::client::PageClient;
use crate::network::errors::ExtractError;
use crate::refinery::collector::MediaCollector;
use crate::refinery::selectors;

pub struct StaticHtmlStrategy {
    client: PageClient,
}

impl StaticHtmlStrategy {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            client: PageClient::new()?,
        })
    }

    pub async fn attempt(&self, url: &str) -> Result<ExtractedContent, ExtractError> {
        let body = self.client.fetch(url).await?;
        debug!(url, bytes = body.len(), "Mining static HTML");

        mine_static_html(&body)
    }
}

// * Sync DOM pass; accepted images are capped at the first MAX_STATIC_IMAGES
// * in encounter order after classification.
pub fn mine_static_html(html: &str) -> Result<ExtractedContent, ExtractError> {
    let doc = Html::parse_document(html);

    let text = selectors::extract_post_text(&doc).or_else(|| selectors::page_fallback_text(&doc));

    let mut collector = MediaCollector::new();
    selectors::harvest_media(&doc, &mut collector);
    collector.truncate_images(MAX_STATIC_IMAGES);

    if text.is_none() && collector.is_empty() {
        return Err(ExtractError::NoContent("static markup yielded nothing"));
    }

    Ok(collector.into_content(text.unwrap_or_else(|| NO_TEXT_PLACEHOLDER.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_cap_applies_after_classification() {
        let mut body = String::from("<html><body><article>");
        // * 14 legitimate images interleaved with chrome that must not count
        for i in 0..14 {
            body.push_str(&format!(
                r#"<img src="https://media.licdn.com/dms/image/D4D22AQG{i:03}/feedshare-shrink_800/0" alt="slide {i}"/>"#
            ));
            body.push_str(
                r#"<img src="https://media.licdn.com/dms/image/profile-displayphoto-shrink_100/0" alt=""/>"#,
            );
        }
        body.push_str("</article></body></html>");

        let content = mine_static_html(&body).unwrap();
        assert_eq!(content.images.len(), MAX_STATIC_IMAGES);
        // * First-encountered accepted image survives the cap
        assert!(content.images[0].url.contains("D4D22AQG000"));
    }

    #[test]
    fn test_falls_back_to_meta_description() {
        let html = r#"
            <html><head>
                <meta property="og:description" content="Jane Doe: we are hiring across the platform team"/>
            </head><body><div id="app"></div></body></html>
        "#;
        let content = mine_static_html(html).unwrap();
        assert_eq!(
            content.text,
            "Jane Doe: we are hiring across the platform team"
        );
        assert!(content.images.is_empty());
    }

    #[test]
    fn test_skeleton_page_is_failure() {
        let err = mine_static_html("<html><body><div id='app'></div></body></html>").unwrap_err();
        assert!(matches!(err, ExtractError::NoContent(_)));
    }
}
