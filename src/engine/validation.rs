use url::Url;

use crate::config::constants::TARGET_DOMAIN;
use crate::network::errors::ExtractError;

// * Validates a raw post URL before any network activity.
// * Accepts only absolute HTTP(S) URLs whose hostname carries the target
// * domain token; incidental whitespace is trimmed first.
pub fn validate_post_url(raw: &str) -> Result<Url, ExtractError> {
    let trimmed = raw.trim();

    let url = Url::parse(trimmed)
        .map_err(|_| ExtractError::InvalidInput(format!("not an absolute URL: {trimmed}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ExtractError::InvalidInput(format!(
            "unsupported scheme: {}",
            url.scheme()
        )));
    }

    let host_ok = url
        .host_str()
        .map(|h| h.to_lowercase().contains(TARGET_DOMAIN))
        .unwrap_or(false);

    if !host_ok {
        return Err(ExtractError::InvalidInput(format!(
            "not a {TARGET_DOMAIN} URL: {trimmed}"
        )));
    }

    Ok(url)
}
