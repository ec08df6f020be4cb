use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EventHubError;

// =============================================================================
// Closed selector sets
// =============================================================================

/// Event category. `Other` is the catch-all for anything outside the
/// named set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tech,
    Design,
    Networking,
    Other,
}

impl Category {
    /// Categories offered as selector buttons, in display order.
    pub const SELECTABLE: [Category; 3] = [Category::Tech, Category::Design, Category::Networking];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Design => "Design",
            Category::Networking => "Networking",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive exact match on the category name.
impl FromStr for Category {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tech" => Ok(Category::Tech),
            "Design" => Ok(Category::Design),
            "Networking" => Ok(Category::Networking),
            "Other" => Ok(Category::Other),
            _ => Err(EventHubError::UnknownValue {
                kind: "category",
                value: s.to_string(),
            }),
        }
    }
}

/// Category selector: either no restriction or exactly one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => category.fmt(f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// Price-tier selector. `Premium` means "costs money" (price > 0) and is
/// unrelated to [`EventRecord::is_premium`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceTier {
    #[default]
    All,
    Free,
    Premium,
}

impl PriceTier {
    /// Tiers offered as selector buttons, in display order.
    pub const SELECTABLE: [PriceTier; 3] = [PriceTier::All, PriceTier::Free, PriceTier::Premium];

    pub fn admits(&self, price: f64) -> bool {
        match self {
            PriceTier::All => true,
            PriceTier::Free => price == 0.0,
            PriceTier::Premium => price > 0.0,
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceTier::All => f.write_str("All"),
            PriceTier::Free => f.write_str("Free"),
            PriceTier::Premium => f.write_str("Premium"),
        }
    }
}

impl FromStr for PriceTier {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(PriceTier::All),
            "Free" => Ok(PriceTier::Free),
            "Premium" => Ok(PriceTier::Premium),
            _ => Err(EventHubError::UnknownValue {
                kind: "price tier",
                value: s.to_string(),
            }),
        }
    }
}

/// Active sort order for rendered results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Earliest date first.
    #[default]
    Date,
    /// Cheapest first.
    Price,
    /// Highest rating first.
    Rating,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => f.write_str("date"),
            SortKey::Price => f.write_str("price"),
            SortKey::Rating => f.write_str("rating"),
        }
    }
}

impl FromStr for SortKey {
    type Err = EventHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(SortKey::Date),
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            _ => Err(EventHubError::UnknownValue {
                kind: "sort key",
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// A community event in the catalog. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Calendar date; the ISO form is enforced at deserialization.
    pub date: NaiveDate,
    pub location: String,
    pub attendees: u32,
    pub category: Category,
    /// Opaque image URI.
    pub image: String,
    /// Badge flag only. Price-based filtering never looks at it.
    #[serde(default)]
    pub is_premium: bool,
    /// Zero means free.
    pub price: f64,
    /// 0.0 to 5.0.
    pub rating: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EventRecord {
    /// Whether the event is free to attend.
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Price label as shown on an event card: "Free" or "$<amount>".
    pub fn display_price(&self) -> String {
        if self.is_free() {
            "Free".to_string()
        } else {
            format!("${}", self.price)
        }
    }

    /// Check the numeric invariants of a single record.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(EventHubError::Validation(format!(
                "event {}: price must be a non-negative amount, got {}",
                self.id, self.price
            )));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(EventHubError::Validation(format!(
                "event {}: rating must be within 0-{}, got {}",
                self.id, MAX_RATING, self.rating
            )));
        }
        Ok(())
    }
}

/// Who authored a conversation message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    Bot,
    User,
}

impl fmt::Display for MessageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageOrigin::Bot => f.write_str("bot"),
            MessageOrigin::User => f.write_str("user"),
        }
    }
}

/// One entry in a chat session's append-only history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// Strictly increasing within a session.
    pub id: u64,
    pub text: String,
    pub origin: MessageOrigin,
}

impl ConversationMessage {
    pub fn is_bot(&self) -> bool {
        self.origin == MessageOrigin::Bot
    }
}
