use postrake::config::Settings;
use postrake::engine::rendered::RenderedDomStrategy;
use postrake::engine::ExtractionPipeline;
use postrake::model::{ExtractRequest, ExtractedContent};
use postrake::network::errors::ExtractError;

// * Pipeline behavior that is observable without any network access

#[tokio::test]
async fn test_demo_mode_is_deterministic_and_offline() {
    let pipeline = ExtractionPipeline::new(&Settings::without_rendering(0)).unwrap();
    let request = ExtractRequest {
        url: "https://www.linkedin.com/posts/x".into(),
        demo_mode: true,
    };

    let first = pipeline.extract(&request).await.unwrap();
    let second = pipeline.extract(&request).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.images.len(), 3);
    assert_eq!(first.videos.len(), 1);
    assert_eq!(first.documents.len(), 2);
}

#[tokio::test]
async fn test_foreign_url_rejected_before_any_tier() {
    let pipeline = ExtractionPipeline::new(&Settings::without_rendering(0)).unwrap();
    let request = ExtractRequest {
        url: "https://news.ycombinator.com/item?id=1".into(),
        demo_mode: false,
    };

    let err = pipeline.extract(&request).await.unwrap_err();
    assert!(matches!(err, ExtractError::InvalidInput(_)));
}

#[tokio::test]
async fn test_unconfigured_rendering_tier_skips_itself() {
    let strategy = RenderedDomStrategy::new(None).unwrap();
    let err = strategy
        .attempt("https://www.linkedin.com/posts/x")
        .await
        .unwrap_err();
    // * The orchestrator swallows this and advances to the static tier
    assert!(matches!(err, ExtractError::Unconfigured));
    assert!(err.is_fall_through());
}

#[test]
fn test_extracted_content_round_trips_the_wire_schema() {
    let content = postrake::engine::demo::sample_content();
    let json = serde_json::to_string(&content).unwrap();

    assert!(json.contains(r#""type":"PDF Document""#));
    assert!(json.contains(r#""duration":"2:45""#));

    let back: ExtractedContent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, content);
    for image in &back.images {
        assert!(image.url.starts_with("https://"));
    }
}
