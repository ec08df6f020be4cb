//! Delayed delivery of bot replies.
//!
//! A single worker task drains a FIFO queue of replies, sleeping until each
//! one is due, so replies land in submission order. The worker holds only a
//! weak reference to the conversation: once the session is released, or the
//! scheduler is cancelled, outstanding replies are dropped.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::conversation::{Conversation, PendingReply};
use crate::error::ChatError;

struct ReplyJob {
    due: Instant,
    reply: PendingReply,
}

/// Owns the reply worker for one chat session.
pub struct ReplyScheduler {
    queue: mpsc::UnboundedSender<ReplyJob>,
    cancel: watch::Sender<bool>,
    worker: JoinHandle<()>,
    delay: Duration,
}

impl ReplyScheduler {
    /// Spawn the worker on the current tokio runtime.
    pub fn spawn(conversation: Weak<Mutex<Conversation>>, delay: Duration) -> Self {
        let (queue, jobs) = mpsc::unbounded_channel();
        let (cancel, cancelled) = watch::channel(false);
        let worker = tokio::spawn(run(jobs, conversation, cancelled));
        Self {
            queue,
            cancel,
            worker,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Queue `reply` for delivery after the configured delay.
    pub fn schedule(&self, reply: PendingReply) -> Result<(), ChatError> {
        if self.is_cancelled() {
            return Err(ChatError::SchedulerClosed);
        }
        let job = ReplyJob {
            due: Instant::now() + self.delay,
            reply,
        };
        self.queue.send(job).map_err(|_| ChatError::SchedulerClosed)
    }

    /// Drop every outstanding reply and stop the worker. Idempotent.
    pub fn cancel(&self) {
        if !self.cancel.send_replace(true) {
            info!("Reply scheduler cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }

    /// Whether the worker task is still alive.
    pub fn is_running(&self) -> bool {
        !self.worker.is_finished()
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel.send_replace(true);
        self.worker.abort();
    }
}

async fn run(
    mut jobs: mpsc::UnboundedReceiver<ReplyJob>,
    conversation: Weak<Mutex<Conversation>>,
    mut cancelled: watch::Receiver<bool>,
) {
    loop {
        let job = tokio::select! {
            biased;
            _ = cancelled.changed() => break,
            job = jobs.recv() => match job {
                Some(job) => job,
                None => break,
            },
        };

        tokio::select! {
            biased;
            _ = cancelled.changed() => break,
            _ = tokio::time::sleep_until(job.due) => {}
        }

        let Some(state) = conversation.upgrade() else {
            debug!("Conversation released, dropping outstanding replies");
            break;
        };
        let mut guard = state.lock().await;
        let session = guard.id();
        if let Some(message_id) = guard.deliver(job.reply).map(|m| m.id) {
            debug!(%session, message_id, "Bot reply delivered");
        }
    }
    debug!("Reply worker stopped");
}
