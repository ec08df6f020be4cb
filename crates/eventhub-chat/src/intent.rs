//! Keyword-based intent classification.
//!
//! The utterance is lowercased and checked against an ordered rule list;
//! the first rule with a matching keyword picks the reply.

use std::fmt;

use eventhub_core::config::DEFAULT_GREETING;
use serde::{Deserialize, Serialize};

/// A canned assistant reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTemplate {
    /// Seeded first message of a session.
    Greeting,
    /// Help finding or creating events.
    EventDiscovery,
    /// How to register for an event.
    Registration,
    /// Free versus paid events.
    Pricing,
    /// Anything else.
    Fallback,
}

impl ResponseTemplate {
    pub fn text(&self) -> &'static str {
        match self {
            ResponseTemplate::Greeting => DEFAULT_GREETING,
            ResponseTemplate::EventDiscovery => {
                "I can help you find or create events! Would you like to browse available \
                 events or create a new one?"
            }
            ResponseTemplate::Registration => {
                "To register for an event, simply click the 'Register Now' button on any event \
                 card. You'll need to be signed in to complete registration."
            }
            ResponseTemplate::Pricing => {
                "We have both free and premium events. Premium events offer additional benefits \
                 like networking opportunities and exclusive content."
            }
            ResponseTemplate::Fallback => {
                "I'm here to help! You can ask me about events, registration, pricing, or any \
                 other questions you have."
            }
        }
    }
}

impl fmt::Display for ResponseTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

// Checked in order; first hit wins.
static INTENT_RULES: &[(ResponseTemplate, &[&str])] = &[
    (ResponseTemplate::EventDiscovery, &["event"]),
    (ResponseTemplate::Registration, &["register"]),
    (ResponseTemplate::Pricing, &["price", "cost"]),
];

/// Pick the reply for `utterance`. Stateless; empty input falls through to
/// [`ResponseTemplate::Fallback`].
pub fn classify(utterance: &str) -> ResponseTemplate {
    let normalized = utterance.to_lowercase();
    INTENT_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k)))
        .map(|(template, _)| *template)
        .unwrap_or(ResponseTemplate::Fallback)
}
