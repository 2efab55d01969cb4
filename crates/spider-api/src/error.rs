//! Error types for the Spider API boundary.

use thiserror::Error;

/// Errors reported by the vendor client.
#[derive(Debug, Error)]
pub enum SpiderApiError {
    /// The API rejected the supplied credentials.
    #[error("the Spider API rejected the supplied credentials")]
    Unauthorized,

    /// Any other failure while talking to the vendor cloud.
    #[error("Spider API transport error: {0}")]
    Transport(String),
}

impl SpiderApiError {
    /// Whether this is the distinguished bad-credentials signal.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SpiderApiError::Unauthorized)
    }
}
