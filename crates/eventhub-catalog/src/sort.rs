//! Comparators for each [`SortKey`].
//!
//! Comparators report `Equal` for equal keys and rely on a stable sort to
//! keep catalog order among ties.

use std::cmp::Ordering;

use eventhub_core::types::{EventRecord, SortKey};

/// Compare two events under `key`.
pub fn compare(key: SortKey, a: &EventRecord, b: &EventRecord) -> Ordering {
    match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Price => cmp_amount(a.price, b.price),
        SortKey::Rating => cmp_amount(b.rating, a.rating),
    }
}

/// Stable in-place sort of already-filtered events.
pub fn sort_events(events: &mut [&EventRecord], key: SortKey) {
    events.sort_by(|a, b| compare(key, a, b));
}

// Catalog validation guarantees finite values, so the fallback never fires
// on real data. Treating -0.0 and 0.0 as equal keeps them a tie.
fn cmp_amount(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use eventhub_core::types::Category;

    fn event(id: u64, date: (i32, u32, u32), price: f64, rating: f64) -> EventRecord {
        EventRecord {
            id,
            title: format!("Event {}", id),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            location: String::new(),
            attendees: 0,
            category: Category::Other,
            image: String::new(),
            is_premium: false,
            price,
            rating,
            tags: vec![],
        }
    }

    fn ids(events: &[&EventRecord]) -> Vec<u64> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_date_ascending() {
        let a = event(1, (2024, 3, 28), 0.0, 4.5);
        let b = event(2, (2024, 3, 25), 199.0, 4.8);
        assert_eq!(compare(SortKey::Date, &a, &b), Ordering::Greater);
        assert_eq!(compare(SortKey::Date, &b, &a), Ordering::Less);
    }

    #[test]
    fn test_price_ascending() {
        let a = event(1, (2024, 1, 1), 50.0, 1.0);
        let b = event(2, (2024, 1, 1), 0.0, 1.0);
        assert_eq!(compare(SortKey::Price, &a, &b), Ordering::Greater);
    }

    #[test]
    fn test_rating_descending() {
        let a = event(1, (2024, 1, 1), 0.0, 4.5);
        let b = event(2, (2024, 1, 1), 0.0, 4.8);
        assert_eq!(compare(SortKey::Rating, &a, &b), Ordering::Greater);
        assert_eq!(compare(SortKey::Rating, &b, &a), Ordering::Less);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        let a = event(1, (2024, 1, 1), -0.0, 1.0);
        let b = event(2, (2024, 1, 1), 0.0, 1.0);
        assert_eq!(compare(SortKey::Price, &a, &b), Ordering::Equal);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let events = [
            event(1, (2024, 5, 1), 10.0, 4.0),
            event(2, (2024, 4, 1), 10.0, 4.0),
            event(3, (2024, 5, 1), 10.0, 4.0),
            event(4, (2024, 4, 1), 5.0, 4.0),
        ];
        let mut refs: Vec<&EventRecord> = events.iter().collect();

        sort_events(&mut refs, SortKey::Date);
        assert_eq!(ids(&refs), vec![2, 4, 1, 3]);

        let mut refs: Vec<&EventRecord> = events.iter().collect();
        sort_events(&mut refs, SortKey::Price);
        assert_eq!(ids(&refs), vec![4, 1, 2, 3]);

        let mut refs: Vec<&EventRecord> = events.iter().collect();
        sort_events(&mut refs, SortKey::Rating);
        assert_eq!(ids(&refs), vec![1, 2, 3, 4]);
    }
}
