//! Chat session: conversation state plus its reply scheduler.

use std::sync::Arc;
use std::time::Duration;

use eventhub_core::config::ChatConfig;
use eventhub_core::types::ConversationMessage;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::conversation::{Conversation, ResponderState};
use crate::error::ChatError;
use crate::scheduler::ReplyScheduler;

/// One chat panel instance.
///
/// Dropping the session (or calling [`ChatSession::shutdown`]) cancels
/// every reply that has not been delivered yet.
pub struct ChatSession {
    id: Uuid,
    state: Arc<Mutex<Conversation>>,
    scheduler: ReplyScheduler,
}

impl ChatSession {
    /// Create a closed session seeded with the greeting. Must be called from
    /// within a tokio runtime.
    pub fn new(config: &ChatConfig) -> Self {
        let conversation = Conversation::new(config);
        let id = conversation.id();
        let state = Arc::new(Mutex::new(conversation));
        let scheduler = ReplyScheduler::spawn(
            Arc::downgrade(&state),
            Duration::from_millis(config.reply_delay_ms),
        );
        info!(session = %id, reply_delay_ms = config.reply_delay_ms, "Chat session started");
        Self {
            id,
            state,
            scheduler,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Show the panel. Returns `true` when reopening reset the history.
    pub async fn open(&self) -> bool {
        self.state.lock().await.open()
    }

    pub async fn close(&self) {
        self.state.lock().await.close();
    }

    pub async fn set_input(&self, text: impl Into<String>) {
        self.state.lock().await.set_input(text);
    }

    pub async fn input(&self) -> String {
        self.state.lock().await.input().to_string()
    }

    /// Submit the input buffer.
    ///
    /// Returns the appended user message, or `None` when the buffer was
    /// blank. The bot reply follows after the configured delay.
    pub async fn submit(&self) -> Result<Option<ConversationMessage>, ChatError> {
        if self.scheduler.is_cancelled() {
            return Err(ChatError::SchedulerClosed);
        }
        let mut conversation = self.state.lock().await;
        let Some(reply) = conversation.submit()? else {
            return Ok(None);
        };
        self.scheduler.schedule(reply)?;
        Ok(conversation.messages().last().cloned())
    }

    /// Type `text` into the input buffer and submit it.
    pub async fn send(&self, text: &str) -> Result<Option<ConversationMessage>, ChatError> {
        self.set_input(text).await;
        self.submit().await
    }

    /// Snapshot of the message history.
    pub async fn messages(&self) -> Vec<ConversationMessage> {
        self.state.lock().await.messages().to_vec()
    }

    pub async fn state(&self) -> ResponderState {
        self.state.lock().await.state()
    }

    /// Cancel outstanding replies. Later submissions fail with
    /// [`ChatError::SchedulerClosed`].
    pub fn shutdown(&self) {
        info!(session = %self.id, "Chat session shutting down");
        self.scheduler.cancel();
    }
}
