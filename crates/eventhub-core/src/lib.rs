pub mod config;
pub mod error;
pub mod types;

pub use config::EventHubConfig;
pub use error::{EventHubError, Result};
pub use types::*;
