// * Shared DOM mining for the rendered and static tiers.
// * Prioritized selector cascades over the post markup, with page-level
// * metadata as the last text resort. All candidates go through the
// * classifier before the collector sees them.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::refinery::classifier::{classify, MediaContext, SourceHint};
use crate::refinery::collector::MediaCollector;
use crate::model::MediaKind;

// * Post commentary containers, most specific first. The first selector that
// * yields non-empty text wins.
const TEXT_SELECTOR_CASCADE: &[&str] = &[
    ".feed-shared-update-v2__description .break-words",
    ".feed-shared-update-v2__description",
    ".feed-shared-inline-show-more-text",
    ".update-components-text",
    ".feed-shared-text",
    ".attributed-text-segment-list__content",
    "[data-test-id='main-feed-activity-card__commentary']",
];

static TEXT_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    TEXT_SELECTOR_CASCADE
        .iter()
        .map(|s| Selector::parse(s).expect("Invalid text selector"))
        .collect()
});

// * Image containers; all matches are collected, not just the first
const IMAGE_SELECTOR_CASCADE: &[&str] = &[
    ".update-components-image__image",
    ".feed-shared-image__image",
    ".ivm-view-attr__img--centered",
    "img[src*='media.licdn.com']",
    "article img",
];

static IMAGE_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    IMAGE_SELECTOR_CASCADE
        .iter()
        .map(|s| Selector::parse(s).expect("Invalid image selector"))
        .collect()
});

static SELECTOR_VIDEO: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("video").expect("Invalid video selector"));
static SELECTOR_VIDEO_SOURCE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("source").expect("Invalid source selector"));
static SELECTOR_ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("Invalid anchor selector"));
static SELECTOR_OG_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:description"]"#).expect("Invalid og selector")
});
static SELECTOR_META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("Invalid meta selector")
});
static SELECTOR_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("Invalid title selector"));

// * First non-empty match from the commentary cascade.
pub fn extract_post_text(doc: &Html) -> Option<String> {
    for selector in TEXT_SELECTORS.iter() {
        if let Some(el) = doc.select(selector).next() {
            let text = collapse_whitespace(&el.text().collect::<String>());
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

// * Page-level descriptive fallback: og:description, then the generic meta
// * description, then the document title.
pub fn page_fallback_text(doc: &Html) -> Option<String> {
    for selector in [&*SELECTOR_OG_DESCRIPTION, &*SELECTOR_META_DESCRIPTION] {
        if let Some(meta) = doc.select(selector).next() {
            if let Some(content) = meta.value().attr("content") {
                let content = content.trim();
                if !content.is_empty() {
                    return Some(content.to_string());
                }
            }
        }
    }

    doc.select(&SELECTOR_TITLE)
        .next()
        .map(|t| collapse_whitespace(&t.text().collect::<String>()))
        .filter(|t| !t.is_empty())
}

// * Collects every classified image, video, and document in the document.
pub fn harvest_media(doc: &Html, collector: &mut MediaCollector) {
    harvest_images(doc, collector);
    harvest_videos(doc, collector);
    harvest_documents(doc, collector);
}

fn harvest_images(doc: &Html, collector: &mut MediaCollector) {
    for selector in IMAGE_SELECTORS.iter() {
        for img in doc.select(selector) {
            let Some(src) = image_source(&img) else {
                continue;
            };
            let alt = img.value().attr("alt").unwrap_or_default();
            let container_class = parent_class(&img);
            let ctx = MediaContext {
                alt_text: Some(alt),
                container_class: container_class.as_deref(),
                hint: Some(SourceHint::ImgTag),
            };
            if classify(src, &ctx) == Some(MediaKind::Image) {
                collector.add_image(src, alt);
            }
        }
    }
}

fn harvest_videos(doc: &Html, collector: &mut MediaCollector) {
    for video in doc.select(&SELECTOR_VIDEO) {
        // * Source URL lives on the element itself or on a nested <source>
        let src = video.value().attr("src").or_else(|| {
            video
                .select(&SELECTOR_VIDEO_SOURCE)
                .next()
                .and_then(|s| s.value().attr("src"))
        });
        let Some(src) = src else {
            continue;
        };
        let ctx = MediaContext::from_hint(SourceHint::VideoTag);
        if classify(src, &ctx) == Some(MediaKind::Video) {
            let title = video.value().attr("title").unwrap_or("Post video");
            collector.add_video(src, title, "");
        }
    }
}

fn harvest_documents(doc: &Html, collector: &mut MediaCollector) {
    for anchor in doc.select(&SELECTOR_ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let ctx = MediaContext::from_hint(SourceHint::AnchorHref);
        if classify(href, &ctx) == Some(MediaKind::Document) {
            let label = collapse_whitespace(&anchor.text().collect::<String>());
            let title = if label.is_empty() {
                href.rsplit('/').next().unwrap_or("Attached document")
            } else {
                &label
            };
            collector.add_document(href, title, document_type_label(href), "");
        }
    }
}

// * Human label for a document href, keyed off its extension.
pub fn document_type_label(href: &str) -> &'static str {
    let lower = href.to_lowercase();
    let path = lower.split(['?', '#']).next().unwrap_or(&lower);
    if path.ends_with(".pdf") {
        "PDF Document"
    } else if path.ends_with(".doc") || path.ends_with(".docx") {
        "Word Document"
    } else if path.ends_with(".ppt") || path.ends_with(".pptx") {
        "PowerPoint Presentation"
    } else if path.ends_with(".xls") || path.ends_with(".xlsx") {
        "Excel Spreadsheet"
    } else {
        "Document"
    }
}

// * Rendered pages put the real URL in src; skeleton markup often parks it in
// * a lazy-load attribute instead.
fn image_source<'a>(img: &'a ElementRef) -> Option<&'a str> {
    img.value()
        .attr("src")
        .filter(|s| s.starts_with("http"))
        .or_else(|| img.value().attr("data-delayed-url"))
        .or_else(|| img.value().attr("data-src"))
}

fn parent_class(el: &ElementRef) -> Option<String> {
    el.parent()
        .and_then(ElementRef::wrap)
        .and_then(|p| p.value().attr("class").map(|c| c.to_string()))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
