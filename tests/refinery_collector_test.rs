use postrake::refinery::MediaCollector;

// * Dedup and filename invariants over arbitrary add sequences

#[test]
fn test_no_kind_ever_holds_duplicate_urls() {
    let mut collector = MediaCollector::new();
    let urls = [
        "https://cdn.example.com/media/a.jpg",
        "https://cdn.example.com/media/b.jpg",
        "https://cdn.example.com/media/a.jpg",
        "https://cdn.example.com/media/c.jpg",
        "https://cdn.example.com/media/b.jpg",
        "https://cdn.example.com/media/a.jpg",
    ];
    for url in urls {
        collector.add_image(url, "");
    }

    let content = collector.into_content(String::new());
    assert_eq!(content.images.len(), 3);
    let mut seen = std::collections::HashSet::new();
    for image in &content.images {
        assert!(seen.insert(image.url.clone()), "duplicate {}", image.url);
    }
}

#[test]
fn test_filenames_are_gapless_and_ordered() {
    let mut collector = MediaCollector::new();
    collector.add_video("https://cdn.example.com/v/one.mp4", "one", "1:00");
    collector.add_video("https://cdn.example.com/v/one.mp4", "dup", "1:00");
    collector.add_video("https://cdn.example.com/v/two.mp4", "two", "2:00");
    collector.add_document("https://cdn.example.com/d/report.pdf", "report", "PDF Document", "");

    let content = collector.into_content(String::new());
    assert_eq!(content.videos[0].filename, "video-1.mp4");
    assert_eq!(content.videos[1].filename, "video-2.mp4");
    assert_eq!(content.documents[0].filename, "document-1.pdf");
}
