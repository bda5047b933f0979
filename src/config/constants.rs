// * Configuration Constants
// * Central location for all configurable thresholds and timeouts

// * Hostname token a post URL must carry to be accepted
pub const TARGET_DOMAIN: &str = "linkedin.com";

// * Origin prefixed onto partial media paths mined from script payloads
pub const CDN_ORIGIN: &str = "https://media.licdn.com";

// * Overall remote rendering call timeout in milliseconds
pub const RENDER_TIMEOUT_MS: u64 = 45_000;

// * How long the rendering service waits for the content selector, independent
// * of the overall call timeout
pub const RENDER_WAIT_TIMEOUT_MS: u64 = 10_000;

// * Selector the rendering service waits on before returning HTML
pub const RENDER_WAIT_SELECTOR: &str = ".feed-shared-update-v2";

// * Direct page fetch timeout in seconds
pub const STATIC_FETCH_TIMEOUT_SECS: u64 = 15;

// * Upstream media fetch timeout for the proxy route in seconds
pub const PROXY_TIMEOUT_SECS: u64 = 30;

// * Image cap for the static-HTML tier (encounter order, post-classification)
pub const MAX_STATIC_IMAGES: usize = 10;

// * Candidate URLs shorter than this are truncated placeholders, not media
pub const MIN_MEDIA_URL_LEN: usize = 30;

// * Post text used when no textual content could be located
pub const NO_TEXT_PLACEHOLDER: &str = "No post text could be extracted.";

// * Resolution variants tried when reconstructing image URLs from bare asset IDs
pub const ASSET_RESOLUTION_VARIANTS: &[&str] =
    &["feedshare-shrink_2048_1536", "feedshare-shrink_800"];

// * Default port for the HTTP surface
pub const DEFAULT_PORT: u16 = 5000;
