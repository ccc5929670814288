use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;

use crate::prompt::TipRequest;
use crate::provider::TipProvider;
use crate::{EMPTY_FALLBACK, FAILURE_FALLBACK};

/// Provider plus timeout; always yields a displayable string.
pub struct TipService<P> {
    provider: P,
    timeout: Duration,
}

impl<P: TipProvider> TipService<P> {
    pub fn new(provider: P, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Tip text, or [`EMPTY_FALLBACK`] / [`FAILURE_FALLBACK`].
    pub async fn tip(&self, req: &TipRequest) -> String {
        match tokio::time::timeout(self.timeout, self.provider.generate(req)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(Ok(_)) => {
                warn!("tip provider returned empty text");
                EMPTY_FALLBACK.to_string()
            }
            Ok(Err(err)) => {
                warn!(error = %err, "tip provider failed");
                FAILURE_FALLBACK.to_string()
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "tip provider timed out");
                FAILURE_FALLBACK.to_string()
            }
        }
    }
}

/// Run `service.tip(req)` on the current tokio runtime without waiting for it.
pub fn spawn_tip<P: TipProvider>(service: Arc<TipService<P>>, req: TipRequest) -> JoinHandle<String> {
    tokio::spawn(async move { service.tip(&req).await })
}
