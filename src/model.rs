// * Wire types shared by the extraction pipeline and the HTTP surface.
// * Field names follow the client schema exactly (camelCase request,
// * `alt`/`duration`/`type`/`size` on the media items).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractRequest {
    pub url: String,
    #[serde(default)]
    pub demo_mode: bool,
}

// * Media kinds a post can carry; drives filename prefixes and dedup scoping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Document,
}

impl MediaKind {
    pub fn filename_prefix(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Document => "document",
        }
    }

    pub fn default_extension(&self) -> &'static str {
        match self {
            MediaKind::Image => "jpg",
            MediaKind::Video => "mp4",
            MediaKind::Document => "pdf",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageItem {
    pub url: String,
    pub alt: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoItem {
    pub url: String,
    pub title: String,
    pub duration: String,
    pub filename: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentItem {
    pub url: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub size: String,
    pub filename: String,
}

// * One extraction result. Built fresh per request and never merged across
// * requests; the orchestrator owns it until handed to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExtractedContent {
    pub text: String,
    pub images: Vec<ImageItem>,
    pub videos: Vec<VideoItem>,
    pub documents: Vec<DocumentItem>,
}

impl ExtractedContent {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.images.is_empty()
            && self.videos.is_empty()
            && self.documents.is_empty()
    }

    pub fn media_count(&self) -> usize {
        self.images.len() + self.videos.len() + self.documents.len()
    }
}

// * A caller's download selection over an ExtractedContent. Consumed by the
// * packaging step; carried here so both sides agree on the shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSet {
    pub include_text: bool,
    pub image_urls: HashSet<String>,
    pub video_urls: HashSet<String>,
    pub document_urls: HashSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_request_wire_names() {
        let parsed: ExtractRequest =
            serde_json::from_str(r#"{"url":"https://www.linkedin.com/posts/x","demoMode":true}"#)
                .unwrap();
        assert!(parsed.demo_mode);
        assert_eq!(parsed.url, "https://www.linkedin.com/posts/x");
    }

    #[test]
    fn test_demo_mode_defaults_to_false() {
        let parsed: ExtractRequest =
            serde_json::from_str(r#"{"url":"https://www.linkedin.com/posts/x"}"#).unwrap();
        assert!(!parsed.demo_mode);
    }

    #[test]
    fn test_document_item_serializes_type_field() {
        let item = DocumentItem {
            url: "https://example.com/report.pdf".into(),
            title: "Report".into(),
            doc_type: "PDF Document".into(),
            size: "1.2 MB".into(),
            filename: "document-1.pdf".into(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""type":"PDF Document""#));
        assert!(!json.contains("doc_type"));
    }
}
