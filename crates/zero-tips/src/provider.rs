use thiserror::Error;

use crate::prompt::TipRequest;

#[derive(Debug, Error)]
pub enum TipError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("no API key (set {0})")]
    MissingApiKey(String),
    #[error("provider failed: {0}")]
    Other(String),
}

/// Raw text generation for a tip request.
///
/// Implementations report failures; turning them into user-facing text is
/// the job of [`crate::TipService`].
#[async_trait::async_trait]
pub trait TipProvider: Send + Sync + 'static {
    async fn generate(&self, req: &TipRequest) -> Result<String, TipError>;
}

/// Fixed text, no I/O.
pub struct StaticTip(String);

impl StaticTip {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

#[async_trait::async_trait]
impl TipProvider for StaticTip {
    async fn generate(&self, _req: &TipRequest) -> Result<String, TipError> {
        Ok(self.0.clone())
    }
}
