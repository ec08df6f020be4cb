//! Error types for the chat assistant.

/// Errors from the chat panel.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat panel is closed")]
    PanelClosed,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("reply scheduler has shut down")]
    SchedulerClosed,
}
