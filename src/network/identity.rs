use rand::seq::SliceRandom;
use reqwest::header::{HeaderMap, HeaderValue};

// * IdentityProfile defines the browser fingerprinting characteristics
// * presented on outbound page fetches.
#[derive(Debug, Clone)]
pub struct IdentityProfile {
    pub chrome_version: &'static str,
    pub user_agent: &'static str,
    pub sec_ch_ua: &'static str,
    pub sec_ch_ua_platform: &'static str,
}

// * Profile pool rotated across fetches. Versions and platforms are kept
// * consistent within each profile so the header set never contradicts the UA.
const PROFILES: &[IdentityProfile] = &[
    IdentityProfile {
        chrome_version: "120",
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.109 Safari/537.36",
        sec_ch_ua: r#""Chromium";v="120", "Google Chrome";v="120", "Not_A Brand";v="99""#,
        sec_ch_ua_platform: r#""Windows""#,
    },
    IdentityProfile {
        chrome_version: "121",
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.6167.85 Safari/537.36",
        sec_ch_ua: r#""Chromium";v="121", "Google Chrome";v="121", "Not A(Brand";v="99""#,
        sec_ch_ua_platform: r#""Windows""#,
    },
    IdentityProfile {
        chrome_version: "120",
        user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.129 Safari/537.36",
        sec_ch_ua: r#""Chromium";v="120", "Google Chrome";v="120", "Not_A Brand";v="99""#,
        sec_ch_ua_platform: r#""macOS""#,
    },
    IdentityProfile {
        chrome_version: "119",
        user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.6045.199 Safari/537.36",
        sec_ch_ua: r#""Chromium";v="119", "Google Chrome";v="119", "Not?A_Brand";v="24""#,
        sec_ch_ua_platform: r#""Linux""#,
    },
];

impl IdentityProfile {
    // * Picks a fresh profile; called once per outbound fetch so consecutive
    // * requests do not present a fixed fingerprint.
    pub fn random() -> &'static IdentityProfile {
        PROFILES
            .choose(&mut rand::thread_rng())
            .expect("! CRITICAL: Empty identity pool")
    }

    pub fn pool() -> &'static [IdentityProfile] {
        PROFILES
    }

    // * Applies the profile plus the standard browser accept headers to a
    // * mutable HeaderMap.
    pub fn apply_to_headers(&self, headers: &mut HeaderMap) {
        headers.insert(
            "User-Agent",
            HeaderValue::from_static(self.user_agent),
        );
        headers.insert(
            "sec-ch-ua",
            HeaderValue::from_static(self.sec_ch_ua),
        );
        headers.insert(
            "sec-ch-ua-platform",
            HeaderValue::from_static(self.sec_ch_ua_platform),
        );
        headers.insert("sec-ch-ua-mobile", HeaderValue::from_static("?0"));
        headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
        headers.insert("Accept-Language", HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(
            "Accept",
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
        );
    }
}
