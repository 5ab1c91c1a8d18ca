//! Generated completion history for the items store.

use chrono::NaiveDate;
use rand::Rng;

use crate::item::entities::TodoItem;

/// Text of every generated item.
pub const DEMO_TEXT: &str = "random thing";

const DEMO_YEAR: i32 = 2018;
const DEMO_MONTH: u32 = 2;
const DEMO_DAYS: u32 = 28;
const MAX_PER_DAY: u32 = 30;

/// Completed items spread over February 2018: for each day a random count in
/// `0..=30`, each completed at midnight UTC of that day. Ids run from 1 in order.
pub fn demo_items<G: Rng>(rng: &mut G) -> Vec<TodoItem> {
    let mut items = Vec::new();
    let mut id: u64 = 0;
    for day in 1..=DEMO_DAYS {
        let Some(midnight) = NaiveDate::from_ymd_opt(DEMO_YEAR, DEMO_MONTH, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        else {
            continue;
        };
        let count = rng.gen_range(0..=MAX_PER_DAY);
        for _ in 0..count {
            id = id.saturating_add(1);
            items.push(TodoItem {
                id,
                text: Some(DEMO_TEXT.to_string()),
                completed: true,
                completed_date: Some(midnight.and_utc()),
            });
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_items_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = demo_items(&mut rng);
        assert!(items.len() <= (DEMO_DAYS * MAX_PER_DAY) as usize);
        for item in &items {
            assert!(item.completed);
            assert_eq!(item.text.as_deref(), Some(DEMO_TEXT));
            let date = item.completed_date.unwrap();
            assert_eq!(date.year(), 2018);
            assert_eq!(date.month(), 2);
            assert!((1..=28).contains(&date.day()));
        }
    }

    #[test]
    fn test_demo_ids_are_sequential() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = demo_items(&mut rng);
        for (index, item) in items.iter().enumerate() {
            assert_eq!(item.id, index as u64 + 1);
        }
    }

    #[test]
    fn test_demo_dates_are_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(3);
        let items = demo_items(&mut rng);
        let dates: Vec<_> = items.iter().filter_map(|i| i.completed_date).collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }
}
