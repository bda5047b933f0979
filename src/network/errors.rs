use thiserror::Error;

// * Unified error type for the extraction pipeline.
// *
// * InvalidInput and AllFailed are terminal; Unconfigured, RenderingFailed,
// * Http, Network and NoContent are per-tier failures the orchestrator
// * swallows before advancing to the next tier.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid URL: {0}")]
    InvalidInput(String),

    #[error("Rendering service credential not configured")]
    Unconfigured,

    #[error("Rendering service failed: {0}")]
    RenderingFailed(String),

    #[error("Upstream returned HTTP {0}")]
    Http(u16),

    #[error("Network failure: {0}")]
    Network(String),

    #[error("No post content located: {0}")]
    NoContent(&'static str),

    #[error("All extraction strategies failed for {0}")]
    AllFailed(String),
}

impl ExtractError {
    // * True for the error kinds a later tier may still recover from
    pub fn is_fall_through(&self) -> bool {
        !matches!(
            self,
            ExtractError::InvalidInput(_) | ExtractError::AllFailed(_)
        )
    }
}

impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ExtractError::Http(status.as_u16())
        } else {
            ExtractError::Network(err.to_string())
        }
    }
}
