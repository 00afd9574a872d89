use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::model::{FormKind, FormSnapshot};

use super::action::SubmissionAction;
use super::error::SubmissionError;

/// Progress of a dispatched submission, reported back to the UI loop.
#[derive(Debug)]
pub enum SubmissionEvent {
    /// The action settled.
    Settled {
        form: FormKind,
        result: Result<(), SubmissionError>,
    },
    /// The restore delay after settling elapsed.
    Restored { form: FormKind },
}

impl SubmissionEvent {
    /// The form this event belongs to.
    pub fn form(&self) -> FormKind {
        match self {
            Self::Settled { form, .. } | Self::Restored { form } => *form,
        }
    }
}

/// Runs submission actions on a tokio runtime and queues their events for the UI loop.
pub struct Dispatcher {
    handle: Handle,
    restore_delay: Duration,
    tx: UnboundedSender<SubmissionEvent>,
    rx: UnboundedReceiver<SubmissionEvent>,
}

impl Dispatcher {
    /// Creates a dispatcher spawning onto `handle`.
    pub fn new(handle: Handle, restore_delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            restore_delay,
            tx,
            rx,
        }
    }

    /// Spawns `action` for `snapshot`.
    ///
    /// The task sends [`SubmissionEvent::Settled`] once the action returns,
    /// then [`SubmissionEvent::Restored`] after the restore delay, whatever
    /// the outcome.
    pub fn dispatch(
        &self,
        action: Arc<dyn SubmissionAction>,
        snapshot: FormSnapshot,
    ) -> JoinHandle<()> {
        let tx = self.tx.clone();
        let restore_delay = self.restore_delay;
        let form = snapshot.form;
        tracing::info!(%form, "dispatching submission");

        self.handle.spawn(async move {
            let result = action.submit(&snapshot).await;
            if tx.send(SubmissionEvent::Settled { form, result }).is_err() {
                tracing::debug!(%form, "event receiver dropped before settle");
                return;
            }
            tokio::time::sleep(restore_delay).await;
            if tx.send(SubmissionEvent::Restored { form }).is_err() {
                tracing::debug!(%form, "event receiver dropped before restore");
            }
        })
    }

    /// Returns the next queued event without waiting.
    pub fn try_next(&mut self) -> Option<SubmissionEvent> {
        self.rx.try_recv().ok()
    }

    /// Waits for the next event.
    pub async fn next(&mut self) -> Option<SubmissionEvent> {
        self.rx.recv().await
    }
}
