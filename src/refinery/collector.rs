// * Deduplicating Collector
// * Accumulates classified media into per-kind ordered sequences, collapsing
// * duplicate URLs (first occurrence wins) and assigning stable sequential
// * filenames per kind.

use std::collections::HashSet;

use crate::model::{DocumentItem, ExtractedContent, ImageItem, MediaKind, VideoItem};

const KNOWN_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "mp4", "webm", "mov", "pdf", "doc", "docx", "ppt",
    "pptx", "xls", "xlsx",
];

#[derive(Debug, Default)]
pub struct MediaCollector {
    images: Vec<ImageItem>,
    videos: Vec<VideoItem>,
    documents: Vec<DocumentItem>,
    seen_images: HashSet<String>,
    seen_videos: HashSet<String>,
    seen_documents: HashSet<String>,
}

impl MediaCollector {
    pub fn new() -> Self {
        Self::default()
    }

    // * Deterministic per-kind filename: <prefix>-<n>.<ext>, n starting at 1
    // * in first-accepted order. Duplicate adds never advance the counter.
    pub fn filename_for(kind: MediaKind, ordinal: usize, url: &str) -> String {
        format!(
            "{}-{}.{}",
            kind.filename_prefix(),
            ordinal,
            extension_from_url(url).unwrap_or_else(|| kind.default_extension().to_string())
        )
    }

    // * Returns false when the URL was already collected for this kind.
    pub fn add_image(&mut self, url: &str, alt: &str) -> bool {
        if !self.seen_images.insert(url.to_string()) {
            return false;
        }
        let filename = Self::filename_for(MediaKind::Image, self.images.len() + 1, url);
        self.images.push(ImageItem {
            url: url.to_string(),
            alt: alt.to_string(),
            filename,
        });
        true
    }

    pub fn add_video(&mut self, url: &str, title: &str, duration: &str) -> bool {
        if !self.seen_videos.insert(url.to_string()) {
            return false;
        }
        let filename = Self::filename_for(MediaKind::Video, self.videos.len() + 1, url);
        self.videos.push(VideoItem {
            url: url.to_string(),
            title: title.to_string(),
            duration: duration.to_string(),
            filename,
        });
        true
    }

    pub fn add_document(&mut self, url: &str, title: &str, doc_type: &str, size: &str) -> bool {
        if !self.seen_documents.insert(url.to_string()) {
            return false;
        }
        let filename = Self::filename_for(MediaKind::Document, self.documents.len() + 1, url);
        self.documents.push(DocumentItem {
            url: url.to_string(),
            title: title.to_string(),
            doc_type: doc_type.to_string(),
            size: size.to_string(),
            filename,
        });
        true
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty() && self.documents.is_empty()
    }

    // * Caps the image sequence to the first `max` accepted entries.
    pub fn truncate_images(&mut self, max: usize) {
        self.images.truncate(max);
    }

    pub fn into_content(self, text: String) -> ExtractedContent {
        ExtractedContent {
            text,
            images: self.images,
            videos: self.videos,
            documents: self.documents,
        }
    }
}

// * Pulls a recognizable media extension out of a URL path, ignoring query
// * strings and fragments.
fn extension_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let ext = path.rsplit('.').next()?.to_lowercase();
    if KNOWN_EXTENSIONS.contains(&ext.as_str()) {
        Some(ext)
    } else {
        None
    }
}
