use postrake::engine::validation::validate_post_url;
use postrake::network::errors::ExtractError;

// * Test Suite for pre-network URL validation

#[test]
fn test_accepts_canonical_post_urls() {
    for url in [
        "https://www.linkedin.com/posts/jane-doe_launch-activity-7123456789-abcd",
        "https://linkedin.com/feed/update/urn:li:activity:7123456789",
        "http://www.linkedin.com/posts/acme_hiring-activity-1",
    ] {
        assert!(validate_post_url(url).is_ok(), "should accept {url}");
    }
}

#[test]
fn test_rejects_foreign_hosts_before_any_network_call() {
    for url in [
        "https://example.com/posts/x",
        "https://linkedin.example.com.evil.io/posts/x",
        "https://twitter.com/status/1",
    ] {
        let err = validate_post_url(url).unwrap_err();
        assert!(
            matches!(err, ExtractError::InvalidInput(_)),
            "should reject {url}"
        );
    }
}

#[test]
fn test_whitespace_is_trimmed_before_validation() {
    assert!(validate_post_url("\t https://www.linkedin.com/posts/x \n").is_ok());
}

#[test]
fn test_rejects_malformed_input() {
    assert!(validate_post_url("").is_err());
    assert!(validate_post_url("linkedin.com/posts/x").is_err());
    assert!(validate_post_url("javascript:alert(1)").is_err());
}
