//! Chat panel state machine.
//!
//! Tracks panel visibility, the input buffer, and the append-only message
//! history of one session:
//! - IdleClosed -> OpenIdle (open)
//! - OpenIdle -> IdleClosed (close)
//! - OpenIdle -> OpenAwaitingReply (submit non-blank text)
//! - OpenAwaitingReply -> OpenIdle (last pending reply delivered)
//!
//! Nothing here waits; the delayed delivery lives in [`crate::scheduler`].

use std::fmt;

use eventhub_core::config::ChatConfig;
use eventhub_core::types::{ConversationMessage, MessageOrigin};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ChatError;
use crate::intent::{classify, ResponseTemplate};

/// Observable state of the chat panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponderState {
    /// Panel hidden. History is kept.
    IdleClosed,
    /// Panel visible, no reply outstanding.
    OpenIdle,
    /// Panel visible, at least one bot reply outstanding.
    OpenAwaitingReply,
}

impl fmt::Display for ResponderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponderState::IdleClosed => write!(f, "IdleClosed"),
            ResponderState::OpenIdle => write!(f, "OpenIdle"),
            ResponderState::OpenAwaitingReply => write!(f, "OpenAwaitingReply"),
        }
    }
}

/// A bot reply owed for a submitted user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Identifier of the user message being answered.
    pub reply_to: u64,
    pub template: ResponseTemplate,
    /// History generation the reply belongs to; stale after a reset.
    pub epoch: u64,
}

/// State of one chat panel session.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: Uuid,
    greeting: Option<String>,
    open: bool,
    opened_before: bool,
    input: String,
    messages: Vec<ConversationMessage>,
    next_id: u64,
    pending: usize,
    epoch: u64,
    reset_on_reopen: bool,
    max_message_len: Option<usize>,
}

impl Conversation {
    /// Start a closed session holding only the greeting.
    pub fn new(config: &ChatConfig) -> Self {
        let mut conversation = Self {
            id: Uuid::new_v4(),
            greeting: config.greeting.clone(),
            open: false,
            opened_before: false,
            input: String::new(),
            messages: Vec::new(),
            next_id: 1,
            pending: 0,
            epoch: 0,
            reset_on_reopen: config.reset_on_reopen,
            max_message_len: config.max_message_len,
        };
        conversation.seed();
        conversation
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn pending_replies(&self) -> usize {
        self.pending
    }

    pub fn state(&self) -> ResponderState {
        match (self.open, self.pending) {
            (false, _) => ResponderState::IdleClosed,
            (true, 0) => ResponderState::OpenIdle,
            (true, _) => ResponderState::OpenAwaitingReply,
        }
    }

    /// Show the panel. With `reset_on_reopen`, a reopen starts over from
    /// the greeting and orphans any outstanding replies.
    ///
    /// Returns `true` when the history was reset.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        let reset = self.opened_before && self.reset_on_reopen;
        if reset {
            self.reset();
        }
        let from = self.state();
        self.open = true;
        self.opened_before = true;
        debug!(session = %self.id, "Chat state: {} -> {}", from, self.state());
        reset
    }

    /// Hide the panel. History and outstanding replies are kept.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        let from = self.state();
        self.open = false;
        debug!(session = %self.id, "Chat state: {} -> {}", from, self.state());
    }

    /// Replace the input buffer.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submit the input buffer.
    ///
    /// Blank input is ignored and returns `Ok(None)`. Otherwise the text is
    /// appended as a user message, the buffer is cleared, and the reply owed
    /// for it is returned for scheduling.
    pub fn submit(&mut self) -> Result<Option<PendingReply>, ChatError> {
        if !self.open {
            return Err(ChatError::PanelClosed);
        }
        if self.input.trim().is_empty() {
            return Ok(None);
        }
        if let Some(max) = self.max_message_len {
            if self.input.chars().count() > max {
                return Err(ChatError::MessageTooLong(max));
            }
        }

        let text = std::mem::take(&mut self.input);
        let template = classify(&text);
        let from = self.state();
        let reply_to = self.push(text, MessageOrigin::User);
        self.pending += 1;
        debug!(
            session = %self.id,
            message_id = reply_to,
            ?template,
            "Chat state: {} -> {}",
            from,
            self.state()
        );

        Ok(Some(PendingReply {
            reply_to,
            template,
            epoch: self.epoch,
        }))
    }

    /// Set the input buffer and submit it in one step.
    pub fn submit_text(&mut self, text: &str) -> Result<Option<PendingReply>, ChatError> {
        self.set_input(text);
        self.submit()
    }

    /// Append the bot message for `reply`.
    ///
    /// Returns `None` when the reply was issued before a reset.
    pub fn deliver(&mut self, reply: PendingReply) -> Option<&ConversationMessage> {
        if reply.epoch != self.epoch {
            warn!(
                session = %self.id,
                reply_to = reply.reply_to,
                "Dropping reply issued before conversation reset"
            );
            return None;
        }
        let from = self.state();
        self.pending = self.pending.saturating_sub(1);
        self.push(reply.template.text().to_string(), MessageOrigin::Bot);
        debug!(
            session = %self.id,
            reply_to = reply.reply_to,
            "Chat state: {} -> {}",
            from,
            self.state()
        );
        self.messages.last()
    }

    fn reset(&mut self) {
        info!(session = %self.id, discarded = self.messages.len(), "Resetting conversation");
        self.messages.clear();
        self.input.clear();
        self.pending = 0;
        self.epoch += 1;
        self.seed();
    }

    fn seed(&mut self) {
        let greeting = self
            .greeting
            .clone()
            .unwrap_or_else(|| ResponseTemplate::Greeting.text().to_string());
        self.push(greeting, MessageOrigin::Bot);
    }

    fn push(&mut self, text: String, origin: MessageOrigin) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ConversationMessage { id, text, origin });
        id
    }
}

// =============================================================================
// Tests
// =============================================================================
