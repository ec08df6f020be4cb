//! In-memory event catalog.
//!
//! Records are validated once at load time and never mutated afterwards.
//! Insertion order is the catalog order used to break sort ties.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use eventhub_core::types::{Category, EventRecord};
use tracing::info;

use crate::error::CatalogError;

/// An ordered, read-only collection of event records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    events: Vec<EventRecord>,
}

impl Catalog {
    /// Build a catalog from records, rejecting invalid records and
    /// duplicate identifiers.
    pub fn from_records(events: Vec<EventRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            event.validate()?;
            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateId(event.id));
            }
        }
        Ok(Self { events })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let events: Vec<EventRecord> = serde_json::from_str(json)?;
        Self::from_records(events)
    }

    /// Load a JSON catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        info!(path = %path.display(), events = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise return the built-in catalog.
    pub fn load_or_seed(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::seed()),
        }
    }

    /// The built-in three-event catalog.
    pub fn seed() -> Self {
        Self {
            events: vec![
                EventRecord {
                    id: 1,
                    title: "AI & Machine Learning Summit 2024".to_string(),
                    description: "Join industry leaders for an immersive experience in AI and ML. \
                                  Network with experts and learn about cutting-edge developments."
                        .to_string(),
                    date: seed_date(2024, 3, 25),
                    location: "San Francisco, CA".to_string(),
                    attendees: 150,
                    category: Category::Tech,
                    image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e"
                        .to_string(),
                    is_premium: true,
                    price: 199.0,
                    rating: 4.8,
                    tags: tags(&["AI", "Machine Learning", "Technology"]),
                },
                EventRecord {
                    id: 2,
                    title: "Startup Networking Mixer".to_string(),
                    description: "Connect with fellow entrepreneurs and investors in a casual \
                                  setting. Perfect for early-stage startups seeking mentorship."
                        .to_string(),
                    date: seed_date(2024, 3, 28),
                    location: "New York, NY".to_string(),
                    attendees: 75,
                    category: Category::Networking,
                    image: "https://images.unsplash.com/photo-1515187029135-18ee286d815b"
                        .to_string(),
                    is_premium: false,
                    price: 0.0,
                    rating: 4.5,
                    tags: tags(&["Networking", "Startups", "Business"]),
                },
                EventRecord {
                    id: 3,
                    title: "Web3 Development Workshop".to_string(),
                    description: "Hands-on workshop covering blockchain, smart contracts, and \
                                  decentralized applications. Build your first dApp!"
                        .to_string(),
                    date: seed_date(2024, 4, 5),
                    location: "Virtual".to_string(),
                    attendees: 200,
                    category: Category::Tech,
                    image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31"
                        .to_string(),
                    is_premium: true,
                    price: 299.0,
                    rating: 4.9,
                    tags: tags(&["Web3", "Blockchain", "Development"]),
                },
            ],
        }
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn get(&self, id: u64) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn tags(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|t| t.to_string()).collect()
}
