use postrake::engine::script_mining::mine_script_payloads;
use postrake::engine::static_html::mine_static_html;
use postrake::config::constants::MAX_STATIC_IMAGES;

// * A skeleton page the DOM tiers see nothing in, with the real carousel
// * buried in embedded script state: tier 3's reason to exist.
#[test]
fn test_carousel_recovered_from_script_state_only() {
    let html = r#"
        <html>
        <head><title></title></head>
        <body>
            <div id="app"></div>
            <script>
                window.__STATE__ = {
                    "post": {
                        "commentary": "x",
                        "media": ["https:\/\/media.licdn.com\/dms\/image\/D4D22AQGslideaaaa\/feedshare-shrink_800\/0",
                                  "https:\/\/media.licdn.com\/dms\/image\/D4D22AQGslidebbbb\/feedshare-shrink_800\/0"],
                        "assets": ["urn:li:digitalmediaAsset:D4D22AQGslidecccc"]
                    }
                };
            </script>
            <script type="application/ld+json">
                {"@type":"SocialMediaPosting","text":"Three countries, one product launch."}
            </script>
        </body>
        </html>
    "#;

    // * The static tier finds no DOM media and no commentary markup
    assert!(mine_static_html(html).is_err() || mine_static_html(html).unwrap().images.is_empty());

    let content = mine_script_payloads(html).unwrap();
    assert_eq!(content.text, "Three countries, one product launch.");

    let urls: Vec<&str> = content.images.iter().map(|i| i.url.as_str()).collect();
    // * Directly embedded URLs first (pass 1), reconstructed variants after (pass 2)
    assert!(urls[0].contains("slideaaaa"));
    assert!(urls[1].contains("slidebbbb"));
    assert!(urls.iter().filter(|u| u.contains("slidecccc")).count() == 2);
}

#[test]
fn test_static_tier_image_cap_holds() {
    let mut html = String::from("<html><body><article>");
    for i in 0..25 {
        html.push_str(&format!(
            r#"<img src="https://media.licdn.com/dms/image/D4D22AQX{i:04}/feedshare-shrink_800/0" alt="s{i}"/>"#
        ));
    }
    html.push_str("</article></body></html>");

    let content = mine_static_html(&html).unwrap();
    assert!(content.images.len() <= MAX_STATIC_IMAGES);
}
