//! Scripted chat assistant for EventHub.
//!
//! Maps free-text messages to canned replies, tracks the conversation
//! history of a chat panel, and appends bot replies after a fixed delay.

pub mod conversation;
pub mod error;
pub mod intent;
pub mod scheduler;
pub mod session;

pub use conversation::{Conversation, PendingReply, ResponderState};
pub use error::ChatError;
pub use intent::{classify, ResponseTemplate};
pub use scheduler::ReplyScheduler;
pub use session::ChatSession;
