// * Media Classifier
// * Decides whether a discovered URL is genuine post media or page chrome.
// * The source markup interleaves both behind overlapping class names, so a
// * single positive signal is never enough: every rule below must hold.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::constants::MIN_MEDIA_URL_LEN;
use crate::model::MediaKind;

// * Tokens that mark a URL as chrome/UI noise regardless of other signals
const URL_BLOCKLIST: &[&str] = &[
    "profile-displayphoto",
    "profile-framedphoto",
    "company-logo",
    "logo",
    "avatar",
    "icon",
    "emoji",
    "ghost-person",
    "background",
    "slideshow",
    "carousel-nav",
    "/in/",
];

// * Tokens that disqualify a candidate via its alt text or container class
const CONTEXT_BLOCKLIST: &[&str] = &["profile", "logo", "avatar"];

// * Kind-specific positive signals; at least one must appear in the URL
const IMAGE_ALLOWLIST: &[&str] = &[
    "media.licdn",
    "dms/image",
    "feedshare",
    "/media/",
    "image",
    "photo",
];
const VIDEO_ALLOWLIST: &[&str] = &["playlist", "video", ".mp4"];

static DOCUMENT_EXT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(pdf|docx?|pptx?|xlsx?)(\?|#|$)").expect("Invalid document regex")
});

// * Where a candidate URL was discovered; anchors carry document intent,
// * video tags carry video intent, everything else defaults to image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceHint {
    ImgTag,
    VideoTag,
    AnchorHref,
    ScriptPayload,
    OgMeta,
    StructuredData,
}

// * Surrounding evidence for a candidate URL
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaContext<'a> {
    pub alt_text: Option<&'a str>,
    pub container_class: Option<&'a str>,
    pub hint: Option<SourceHint>,
}

impl<'a> MediaContext<'a> {
    pub fn from_hint(hint: SourceHint) -> Self {
        Self {
            alt_text: None,
            container_class: None,
            hint: Some(hint),
        }
    }
}

// * Classifies a candidate URL. Returns the accepted media kind, or None when
// * any rule rejects it.
pub fn classify(url: &str, ctx: &MediaContext) -> Option<MediaKind> {
    let lower = url.to_lowercase();

    // * Absolute HTTP(S) only; data URIs are inline chrome assets
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return None;
    }

    // * Truncated or placeholder tokens masquerading as URLs
    if url.len() <= MIN_MEDIA_URL_LEN {
        return None;
    }

    if URL_BLOCKLIST.iter().any(|tok| lower.contains(tok)) {
        return None;
    }

    for field in [ctx.alt_text, ctx.container_class].into_iter().flatten() {
        let field = field.to_lowercase();
        if CONTEXT_BLOCKLIST.iter().any(|tok| field.contains(tok)) {
            return None;
        }
    }

    // * Kind resolution: documents are recognized by extension wherever they
    // * appear; explicit video evidence beats the image allowlist.
    if matches!(ctx.hint, Some(SourceHint::AnchorHref)) || DOCUMENT_EXT_PATTERN.is_match(&lower) {
        if DOCUMENT_EXT_PATTERN.is_match(&lower) {
            return Some(MediaKind::Document);
        }
        return None;
    }

    let video_signal = matches!(ctx.hint, Some(SourceHint::VideoTag))
        || VIDEO_ALLOWLIST.iter().any(|tok| lower.contains(tok));
    if video_signal {
        // * A <video> element src still needs a positive URL token
        if VIDEO_ALLOWLIST.iter().any(|tok| lower.contains(tok))
            || IMAGE_ALLOWLIST.iter().any(|tok| lower.contains(tok))
        {
            return Some(MediaKind::Video);
        }
        return None;
    }

    if IMAGE_ALLOWLIST.iter().any(|tok| lower.contains(tok)) {
        return Some(MediaKind::Image);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img_ctx() -> MediaContext<'static> {
        MediaContext::from_hint(SourceHint::ImgTag)
    }

    #[test]
    fn test_accepts_cdn_image_with_clean_alt() {
        let ctx = MediaContext {
            alt_text: Some("team photo"),
            container_class: None,
            hint: Some(SourceHint::ImgTag),
        };
        assert_eq!(
            classify("https://media.example-cdn.com/dms/image/abc123", &ctx),
            Some(MediaKind::Image)
        );
    }

    #[test]
    fn test_blocklist_beats_allowlist() {
        // * "media" token present, but avatar marker wins
        assert_eq!(
            classify("https://cdn.example.com/avatar/media/123.jpg", &img_ctx()),
            None
        );
    }

    #[test]
    fn test_rejects_every_blocklist_token() {
        for url in [
            "https://media.licdn.com/dms/image/profile-displayphoto-shrink_100/x",
            "https://media.licdn.com/dms/image/company-logo_200/photo-y",
            "https://cdn.example.com/media/image/avatar-small-9999999",
            "https://cdn.example.com/static/media/emoji/1f600-large.png",
            "https://cdn.example.com/media/image/icons/icon-share-20",
            "https://www.linkedin.com/in/someone/media/image-12345",
        ] {
            assert_eq!(classify(url, &img_ctx()), None, "should reject {url}");
        }
    }

    #[test]
    fn test_rejects_context_blocklist_in_alt_and_class() {
        let by_alt = MediaContext {
            alt_text: Some("Profile picture of Jane"),
            container_class: None,
            hint: Some(SourceHint::ImgTag),
        };
        let by_class = MediaContext {
            alt_text: None,
            container_class: Some("org-top-card Logo__container"),
            hint: Some(SourceHint::ImgTag),
        };
        let url = "https://media.licdn.com/dms/image/D4D22AQGabc/feedshare-shrink_800/0";
        assert_eq!(classify(url, &by_alt), None);
        assert_eq!(classify(url, &by_class), None);
        assert_eq!(classify(url, &img_ctx()), Some(MediaKind::Image));
    }

    #[test]
    fn test_rejects_data_uri_and_relative() {
        assert_eq!(
            classify("data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAUA", &img_ctx()),
            None
        );
        assert_eq!(
            classify("/dms/image/D4D22AQGabc/feedshare-shrink_800/0", &img_ctx()),
            None
        );
    }

    #[test]
    fn test_rejects_short_placeholder() {
        assert_eq!(classify("https://a.co/image/1", &img_ctx()), None);
    }

    #[test]
    fn test_requires_positive_signal() {
        assert_eq!(
            classify("https://static.example.com/assets/spacer-blank-1x1.gif", &img_ctx()),
            None
        );
    }

    #[test]
    fn test_video_from_tag_and_from_extension() {
        let tag_ctx = MediaContext::from_hint(SourceHint::VideoTag);
        assert_eq!(
            classify("https://dms.licdn.com/playlist/vid/D4D05AQab/mp4-720p-30fp-crf28/0", &tag_ctx),
            Some(MediaKind::Video)
        );
        assert_eq!(
            classify(
                "https://cdn.example.com/media/clips/launch-recording.mp4",
                &MediaContext::from_hint(SourceHint::ScriptPayload)
            ),
            Some(MediaKind::Video)
        );
    }

    #[test]
    fn test_document_from_anchor_extension() {
        let ctx = MediaContext::from_hint(SourceHint::AnchorHref);
        assert_eq!(
            classify("https://files.example.com/papers/whitepaper-2024.pdf", &ctx),
            Some(MediaKind::Document)
        );
        assert_eq!(
            classify("https://files.example.com/decks/roadmap-2024.pptx?dl=1", &ctx),
            Some(MediaKind::Document)
        );
        // * Anchor without a document extension is a plain link, not media
        assert_eq!(
            classify("https://files.example.com/media/image/page-about-us", &ctx),
            None
        );
    }

    #[test]
    fn test_script_payload_image() {
        let ctx = MediaContext::from_hint(SourceHint::ScriptPayload);
        assert_eq!(
            classify(
                "https://media.licdn.com/dms/image/D4D22AQGabc/feedshare-shrink_2048_1536/0",
                &ctx
            ),
            Some(MediaKind::Image)
        );
    }
}
