// * Process configuration, read once at startup and passed down explicitly.
// * The rendering credential is deliberately not read ambiently by the
// * strategies so both configured and unconfigured paths stay testable.

use std::env;

use crate::config::constants::DEFAULT_PORT;

#[derive(Debug, Clone)]
pub struct Settings {
    // * Credential for the remote rendering service; None disables the
    // * rendered-DOM tier entirely
    pub render_api_key: Option<String>,
    pub listen_port: u16,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            render_api_key: env::var("SCRAPINGBEE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            listen_port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }

    // * Test/constructor helper for an explicitly unconfigured instance
    pub fn without_rendering(port: u16) -> Self {
        Self {
            render_api_key: None,
            listen_port: port,
        }
    }
}
