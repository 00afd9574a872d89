use std::time::Duration;

use async_trait::async_trait;

use crate::model::{FormSnapshot, Payload};

use super::error::SubmissionError;

/// Delivers a form snapshot to a backend.
///
/// Implementations must settle exactly once per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionAction: Send + Sync {
    async fn submit(&self, snapshot: &FormSnapshot) -> Result<(), SubmissionError>;
}

/// Stands in for a backend: encodes the payload, waits a fixed delay, and succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmission {
    delay: Duration,
}

impl SimulatedSubmission {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionAction for SimulatedSubmission {
    async fn submit(&self, snapshot: &FormSnapshot) -> Result<(), SubmissionError> {
        let payload = Payload::from_snapshot(snapshot)?;
        let body = serde_json::to_string(&payload)?;
        tracing::debug!(
            endpoint = payload.endpoint(),
            bytes = body.len(),
            delay_ms = self.delay.as_millis() as u64,
            "simulating submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
