//! Filter predicates.
//!
//! An event passes when it satisfies the category, price-tier, and
//! free-text predicates together.

use eventhub_core::types::{CategoryFilter, EventRecord, PriceTier};

/// The user's current narrowing criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub price: PriceTier,
    /// Free-text query. Empty matches everything.
    pub query: String,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, price: PriceTier, query: impl Into<String>) -> Self {
        Self {
            category,
            price,
            query: query.into(),
        }
    }

    /// Whether `event` passes all three predicates.
    pub fn matches(&self, event: &EventRecord) -> bool {
        self.matcher().matches(event)
    }

    /// Prepare a reusable matcher with the query lowercased once.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher {
            criteria: self,
            needle: self.query.to_lowercase(),
        }
    }
}

/// Criteria with a pre-normalized query, for matching many events.
pub struct Matcher<'a> {
    criteria: &'a FilterCriteria,
    needle: String,
}

impl Matcher<'_> {
    pub fn matches(&self, event: &EventRecord) -> bool {
        self.criteria.category.admits(event.category)
            && self.criteria.price.admits(event.price)
            && matches_query(event, &self.needle)
    }
}

/// Case-insensitive substring test against title, description, and tags.
///
/// `needle` must already be lowercase.
pub fn matches_query(event: &EventRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    event.title.to_lowercase().contains(needle)
        || event.description.to_lowercase().contains(needle)
        || event
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eventhub_core::types::Category;

    fn event(category: Category, price: f64) -> EventRecord {
        EventRecord {
            id: 1,
            title: "Rust Meetup".to_string(),
            description: "Talks about ownership and lifetimes".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            location: "Zurich".to_string(),
            attendees: 40,
            category,
            image: String::new(),
            is_premium: false,
            price,
            rating: 4.0,
            tags: vec!["Systems".to_string(), "Open Source".to_string()],
        }
    }

    #[test]
    fn test_default_criteria_match_everything() {
        let criteria = FilterCriteria::default();
        assert!(criteria.matches(&event(Category::Tech, 0.0)));
        assert!(criteria.matches(&event(Category::Other, 99.0)));
    }

    #[test]
    fn test_category_predicate() {
        let criteria = FilterCriteria::new(CategoryFilter::Only(Category::Design), PriceTier::All, "");
        assert!(!criteria.matches(&event(Category::Tech, 0.0)));
        assert!(criteria.matches(&event(Category::Design, 0.0)));
    }

    #[test]
    fn test_price_predicate_ignores_premium_flag() {
        let mut free_badged = event(Category::Tech, 0.0);
        free_badged.is_premium = true;
        let premium = FilterCriteria::new(CategoryFilter::All, PriceTier::Premium, "");
        let free = FilterCriteria::new(CategoryFilter::All, PriceTier::Free, "");
        assert!(!premium.matches(&free_badged));
        assert!(free.matches(&free_badged));
    }

    #[test]
    fn test_query_matches_title_case_insensitive() {
        let criteria = FilterCriteria::new(CategoryFilter::All, PriceTier::All, "RUST meet");
        assert!(criteria.matches(&event(Category::Tech, 0.0)));
    }

    #[test]
    fn test_query_matches_description() {
        let criteria = FilterCriteria::new(CategoryFilter::All, PriceTier::All, "lifetimes");
        assert!(criteria.matches(&event(Category::Tech, 0.0)));
    }

    #[test]
    fn test_query_matches_tag_substring() {
        let criteria = FilterCriteria::new(CategoryFilter::All, PriceTier::All, "pen sou");
        assert!(criteria.matches(&event(Category::Tech, 0.0)));
    }

    #[test]
    fn test_query_is_not_tokenized() {
        // Words present but not contiguous.
        let criteria = FilterCriteria::new(CategoryFilter::All, PriceTier::All, "meetup rust");
        assert!(!criteria.matches(&event(Category::Tech, 0.0)));
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let criteria = FilterCriteria::new(CategoryFilter::All, PriceTier::All, " ");
        assert!(criteria.matches(&event(Category::Tech, 0.0)));
        let criteria = FilterCriteria::new(CategoryFilter::All, PriceTier::All, "  ");
        assert!(!criteria.matches(&event(Category::Tech, 0.0)));
    }

    #[test]
    fn test_all_predicates_combined() {
        let criteria = FilterCriteria::new(
            CategoryFilter::Only(Category::Tech),
            PriceTier::Premium,
            "systems",
        );
        assert!(criteria.matches(&event(Category::Tech, 10.0)));
        assert!(!criteria.matches(&event(Category::Tech, 0.0)));
        assert!(!criteria.matches(&event(Category::Design, 10.0)));
    }
}
