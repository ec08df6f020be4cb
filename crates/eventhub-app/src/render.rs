//! Plain-text rendering for the terminal.

use eventhub_core::types::{ConversationMessage, EventRecord};

/// Multi-line card for one event.
pub fn event_card(event: &EventRecord) -> String {
    let badge = if event.is_premium { "  [Premium]" } else { "" };
    let mut card = format!(
        "{}{}\n  \u{2605} {:.1}  |  {}  |  {}\n  {}  |  {} attendees  |  {}\n  {}",
        event.title,
        badge,
        event.rating,
        event.category,
        event.display_price(),
        event.date.format("%A, %B %-d, %Y"),
        event.attendees,
        event.location,
        event.description,
    );
    if !event.tags.is_empty() {
        card.push_str(&format!("\n  tags: {}", event.tags.join(", ")));
    }
    card.push('\n');
    card
}

/// One chat line, prefixed by its author.
pub fn message_line(message: &ConversationMessage) -> String {
    let who = if message.is_bot() { "assistant" } else { "you" };
    format!("{:>9}> {}", who, message.text)
}

/// Print messages after the first `shown` and return the new count.
pub fn print_new_messages(messages: &[ConversationMessage], shown: usize) -> usize {
    for message in messages.iter().skip(shown) {
        println!("{}", message_line(message));
    }
    messages.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventhub_catalog::Catalog;
    use eventhub_core::types::MessageOrigin;

    #[test]
    fn test_event_card_free_event() {
        let catalog = Catalog::seed();
        let card = event_card(catalog.get(2).unwrap());
        assert!(card.starts_with("Startup Networking Mixer\n"));
        assert!(card.contains("Free"));
        assert!(card.contains("Thursday, March 28, 2024"));
        assert!(card.contains("75 attendees"));
        assert!(card.contains("tags: Networking, Startups, Business"));
        assert!(!card.contains("[Premium]"));
    }

    #[test]
    fn test_event_card_paid_event() {
        let catalog = Catalog::seed();
        let card = event_card(catalog.get(1).unwrap());
        assert!(card.contains("[Premium]"));
        assert!(card.contains("$199"));
        assert!(card.contains("4.8"));
        assert!(card.contains("Monday, March 25, 2024"));
    }

    #[test]
    fn test_message_line() {
        let bot = ConversationMessage {
            id: 1,
            text: "Hello".to_string(),
            origin: MessageOrigin::Bot,
        };
        let user = ConversationMessage {
            id: 2,
            text: "hi".to_string(),
            origin: MessageOrigin::User,
        };
        assert_eq!(message_line(&bot), "assistant> Hello");
        assert_eq!(message_line(&user), "      you> hi");
    }

    #[test]
    fn test_print_new_messages_returns_count() {
        let messages = vec![ConversationMessage {
            id: 1,
            text: "Hello".to_string(),
            origin: MessageOrigin::Bot,
        }];
        assert_eq!(print_new_messages(&messages, 0), 1);
        assert_eq!(print_new_messages(&messages, 1), 1);
    }
}
