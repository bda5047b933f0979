// * Demo Content Provider
// * Fixed, realistic sample payload for previewing the client flow without
// * depending on live extraction. Deterministic and network-free.

use crate::model::{DocumentItem, ExtractedContent, ImageItem, VideoItem};

pub fn sample_content() -> ExtractedContent {
    ExtractedContent {
        text: "\u{1F680} Excited to share our latest innovation in AI technology! Our team has been working tirelessly to develop a revolutionary machine learning platform that will transform how businesses approach data analytics. The future of intelligent automation is here, and we're proud to be leading the charge.\n\nKey highlights:\n\u{2705} 40% faster processing speed\n\u{2705} Enhanced accuracy with 99.2% precision\n\u{2705} Seamless integration with existing systems\n\u{2705} Cost-effective solution for enterprises\n\nThank you to everyone who supported this journey. Looking forward to the amazing possibilities ahead!\n\n#Innovation #Technology #AI #MachineLearning #Future #Startup #Tech".to_string(),
        images: vec![
            ImageItem {
                url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
                alt: "AI technology dashboard interface showing analytics".to_string(),
                filename: "ai-dashboard.jpg".to_string(),
            },
            ImageItem {
                url: "https://images.unsplash.com/photo-1497366216548-37526070297c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
                alt: "Modern office space with technology".to_string(),
                filename: "office-tech.jpg".to_string(),
            },
            ImageItem {
                url: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600".to_string(),
                alt: "Team collaboration meeting".to_string(),
                filename: "team-collaboration.jpg".to_string(),
            },
        ],
        videos: vec![VideoItem {
            url: "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4".to_string(),
            title: "Product Demo Video".to_string(),
            duration: "2:45".to_string(),
            filename: "product-demo.mp4".to_string(),
        }],
        documents: vec![
            DocumentItem {
                url: "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf".to_string(),
                title: "AI Innovation Whitepaper.pdf".to_string(),
                doc_type: "PDF Document".to_string(),
                size: "2.3 MB".to_string(),
                filename: "ai-whitepaper.pdf".to_string(),
            },
            DocumentItem {
                url: "https://file-examples.com/storage/fe68c1a5c4b6b7a6f42ac4e/2017/10/file_example_PPT_1MB.ppt".to_string(),
                title: "Product Roadmap 2024.pptx".to_string(),
                doc_type: "PowerPoint Presentation".to_string(),
                size: "5.7 MB".to_string(),
                filename: "roadmap-2024.pptx".to_string(),
            },
        ],
    }
}
