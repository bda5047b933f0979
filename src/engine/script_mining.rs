// * Tier 3 - Script-Payload-Mining Strategy
// * Client-rendered pages embed the real post data as inline JSON state even
// * when the visible DOM is a skeleton. This tier treats every inline script
// * block as text and regex-mines it for media URLs and asset IDs, which
// * recovers carousel images the DOM tiers miss entirely.

use regex::Regex;
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::LazyLock;
use tracing::debug;

use crate::config::constants::{ASSET_RESOLUTION_VARIANTS, CDN_ORIGIN, NO_TEXT_PLACEHOLDER};
use crate::model::{ExtractedContent, MediaKind};
use crate::network::client::PageClient;
use crate::network::errors::ExtractError;
use crate::refinery::classifier::{classify, MediaContext, SourceHint};
use crate::refinery::collector::MediaCollector;
use crate::refinery::selectors;

static SELECTOR_SCRIPT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("script").expect("Invalid script selector"));

// * Pass 1: key/value shapes the embedded state is known to use
static RE_IMAGE_URL_KV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""imageUrl"\s*:\s*"([^"]+)""#).expect("Invalid imageUrl regex")
});
static RE_URL_KV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""url"\s*:\s*"([^"]+)""#).expect("Invalid url regex"));
static RE_MEDIA_ARRAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""(?:images|media)"\s*:\s*\[([^\]]*)\]"#).expect("Invalid media array regex")
});
static RE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)+)""#).expect("Invalid quoted regex"));
static RE_CDN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https:\\?/\\?/media\.licdn\.com[^"'\s<>]+"#).expect("Invalid CDN regex")
});

// * Pass 2: bare content-asset identifiers (fixed-prefix alphanumerics)
static RE_ASSET_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]\d[A-Z]\d{2}AQ[A-Za-z0-9_-]{10,})\b").expect("Invalid asset id regex")
});

// * Pass 4: anything that still looks like an absolute URL
static RE_BARE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https://[^\s"'<>\\]+"#).expect("Invalid bare URL regex"));

// * Video shapes
static RE_VIDEO_URL_KV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""videoUrl"\s*:\s*"([^"]+)""#).expect("Invalid videoUrl regex")
});
static RE_BARE_MP4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https://[^\s"'<>\\]+\.mp4[^\s"'<>\\]*"#).expect("Invalid mp4 regex")
});

static RE_UNICODE_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\u([0-9a-fA-F]{4})").expect("Invalid escape regex"));

// * Tokens a loosely-matched "url" value must carry before classification
const MEDIA_PATH_TOKENS: &[&str] = &["dms/image", "media.licdn", "feedshare", "/media/"];

// * Structured-data keys whose string values are media candidates
const MEDIA_KEY_TOKENS: &[&str] = &["image", "url", "media", "thumbnail"];

// * Structured-data keys that carry the post's textual content
const TEXT_KEYS: &[&str] = &["articlebody", "commentary", "text", "description", "headline"];

pub struct ScriptMiningStrategy {
    client: PageClient,
}

impl ScriptMiningStrategy {
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self {
            client: PageClient::new()?,
        })
    }

    pub async fn attempt(&self, url: &str) -> Result<ExtractedContent, ExtractError> {
        let body = self.client.fetch(url).await?;
        debug!(url, bytes = body.len(), "Mining script payloads");

        mine_script_payloads(&body)
    }
}

// * Full mining pipeline over a page's inline script blocks. Pass order is
// * fixed; the collector's first-seen-wins dedup makes it the tie-break.
pub fn mine_script_payloads(html: &str) -> Result<ExtractedContent, ExtractError> {
    let doc = Html::parse_document(html);

    let mut inline = String::new();
    let mut ld_blocks: Vec<String> = Vec::new();

    for script in doc.select(&SELECTOR_SCRIPT) {
        if script.value().attr("src").is_some() {
            continue;
        }
        let content: String = script.text().collect();
        if script
            .value()
            .attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("application/ld+json"))
        {
            ld_blocks.push(content);
        } else {
            inline.push_str(&content);
            inline.push('\n');
        }
    }

    let mut collector = MediaCollector::new();

    pass_key_value_urls(&inline, &mut collector);
    pass_asset_ids(&inline, &mut collector);
    pass_structured_data(&ld_blocks, &mut collector);
    pass_bare_urls(&inline, &mut collector);
    pass_videos(&inline, &mut collector);

    let text = structured_data_text(&ld_blocks).or_else(|| selectors::page_fallback_text(&doc));

    if text.is_none() && collector.is_empty() {
        return Err(ExtractError::NoContent("script payloads yielded nothing"));
    }

    Ok(collector.into_content(text.unwrap_or_else(|| NO_TEXT_PLACEHOLDER.to_string())))
}

// * Pass 1: known key/value and array shapes, plus raw CDN URL matches.
fn pass_key_value_urls(scripts: &str, collector: &mut MediaCollector) {
    for caps in RE_IMAGE_URL_KV.captures_iter(scripts) {
        offer_image(&caps[1], collector);
    }

    for caps in RE_URL_KV.captures_iter(scripts) {
        let raw = &caps[1];
        if MEDIA_PATH_TOKENS.iter().any(|tok| raw.contains(tok)) {
            offer_image(raw, collector);
        }
    }

    // * Array-valued "images"/"media": split the body on quoted strings and
    // * treat each as its own candidate
    for caps in RE_MEDIA_ARRAY.captures_iter(scripts) {
        for quoted in RE_QUOTED.captures_iter(&caps[1]) {
            offer_image(&quoted[1], collector);
        }
    }

    for m in RE_CDN_URL.find_iter(scripts) {
        offer_image(m.as_str(), collector);
    }
}

// * Pass 2: reconstruct carousel image URLs from bare asset IDs. Script state
// * frequently references an asset only by ID; combining it with the known
// * path templates recovers the image in each resolution variant.
fn pass_asset_ids(scripts: &str, collector: &mut MediaCollector) {
    for caps in RE_ASSET_ID.captures_iter(scripts) {
        let id = &caps[1];
        for variant in ASSET_RESOLUTION_VARIANTS {
            let candidate = format!("{CDN_ORIGIN}/dms/image/{id}/{variant}/0");
            offer_image(&candidate, collector);
        }
    }
}

// * Pass 3: structured-data blocks, walked with an explicit worklist so
// * adversarially nested payloads cannot blow the stack. A malformed block is
// * skipped, never aborting the pass.
fn pass_structured_data(blocks: &[String], collector: &mut MediaCollector) {
    for block in blocks {
        let parsed: Value = match serde_json::from_str(block) {
            Ok(v) => v,
            Err(e) => {
                debug!(error = %e, "Skipping malformed structured-data block");
                continue;
            }
        };

        let mut worklist: Vec<(Option<String>, Value)> = vec![(None, parsed)];
        while let Some((key, value)) = worklist.pop() {
            match value {
                Value::Object(map) => {
                    for (k, v) in map {
                        worklist.push((Some(k.to_lowercase()), v));
                    }
                }
                // * Array elements inherit the array's key
                Value::Array(items) => {
                    for item in items {
                        worklist.push((key.clone(), item));
                    }
                }
                Value::String(s) => {
                    let suggests_media = key
                        .as_deref()
                        .is_some_and(|k| MEDIA_KEY_TOKENS.iter().any(|tok| k.contains(tok)));
                    if suggests_media {
                        offer_candidate(&s, SourceHint::StructuredData, collector);
                    }
                }
                _ => {}
            }
        }
    }
}

// * Pass 4: whatever survives as plain text - bare absolute URLs that carry a
// * media token.
fn pass_bare_urls(scripts: &str, collector: &mut MediaCollector) {
    for m in RE_BARE_URL.find_iter(scripts) {
        let raw = m.as_str();
        if MEDIA_PATH_TOKENS.iter().any(|tok| raw.contains(tok)) {
            offer_image(raw, collector);
        }
    }
}

// * Video mining: explicit key/value shape plus bare .mp4 URLs.
fn pass_videos(scripts: &str, collector: &mut MediaCollector) {
    for caps in RE_VIDEO_URL_KV.captures_iter(scripts) {
        offer_video(&caps[1], collector);
    }
    for m in RE_BARE_MP4.find_iter(scripts) {
        offer_video(m.as_str(), collector);
    }
}

fn offer_image(raw: &str, collector: &mut MediaCollector) {
    offer_candidate(raw, SourceHint::ScriptPayload, collector);
}

fn offer_video(raw: &str, collector: &mut MediaCollector) {
    let Some(url) = normalize_candidate(raw) else {
        return;
    };
    let ctx = MediaContext::from_hint(SourceHint::VideoTag);
    if classify(&url, &ctx) == Some(MediaKind::Video) {
        collector.add_video(&url, "Post video", "");
    }
}

fn offer_candidate(raw: &str, hint: SourceHint, collector: &mut MediaCollector) {
    let Some(url) = normalize_candidate(raw) else {
        return;
    };
    let ctx = MediaContext::from_hint(hint);
    match classify(&url, &ctx) {
        Some(MediaKind::Image) => {
            collector.add_image(&url, "");
        }
        Some(MediaKind::Video) => {
            collector.add_video(&url, "Post video", "");
        }
        _ => {}
    }
}

// * Candidate cleanup: JSON escape sequences undone, HTML entities fixed, and
// * partial CDN paths promoted to absolute URLs.
pub fn normalize_candidate(raw: &str) -> Option<String> {
    let mut candidate = raw.trim().to_string();

    candidate = RE_UNICODE_ESCAPE
        .replace_all(&candidate, |caps: &regex::Captures| {
            u32::from_str_radix(&caps[1], 16)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        })
        .into_owned();

    candidate = candidate
        .replace("\\/", "/")
        .replace("\\\"", "\"")
        .replace("&amp;", "&");

    if candidate.starts_with("http://") || candidate.starts_with("https://") {
        return Some(candidate);
    }
    if let Some(rest) = candidate.strip_prefix("//") {
        return Some(format!("https://{rest}"));
    }

    // * Partial media paths appear without an origin in script state
    if candidate.starts_with("/dms/") {
        return Some(format!("{CDN_ORIGIN}{candidate}"));
    }
    if candidate.starts_with("dms/") {
        return Some(format!("{CDN_ORIGIN}/{candidate}"));
    }

    None
}

// * First textual value found under a known text key, in block order.
fn structured_data_text(blocks: &[String]) -> Option<String> {
    for block in blocks {
        let Ok(parsed) = serde_json::from_str::<Value>(block) else {
            continue;
        };

        let mut worklist: Vec<(Option<String>, Value)> = vec![(None, parsed)];
        while let Some((key, value)) = worklist.pop() {
            match value {
                Value::Object(map) => {
                    for (k, v) in map {
                        worklist.push((Some(k.to_lowercase()), v));
                    }
                }
                Value::Array(items) => {
                    for item in items {
                        worklist.push((key.clone(), item));
                    }
                }
                Value::String(s) => {
                    let is_text_key = key
                        .as_deref()
                        .is_some_and(|k| TEXT_KEYS.iter().any(|tok| k == *tok));
                    let trimmed = s.trim();
                    if is_text_key && !trimmed.is_empty() {
                        return Some(trimmed.to_string());
                    }
                }
                _ => {}
            }
        }
    }
    None
}
