use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::item::entities::TodoItem;

/// Completed items per completion day, oldest day first. Items without a
/// completion date are skipped.
#[must_use]
pub fn completion_histogram(items: &[TodoItem]) -> BTreeMap<NaiveDate, usize> {
    let mut histogram = BTreeMap::new();
    for date in items
        .iter()
        .filter(|item| item.completed)
        .filter_map(|item| item.completed_date)
    {
        let count: &mut usize = histogram.entry(date.date_naive()).or_default();
        *count = count.saturating_add(1);
    }
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::seed::demo_items;
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn done(id: u64, day: u32) -> TodoItem {
        TodoItem {
            id,
            text: None,
            completed: true,
            completed_date: Utc.with_ymd_and_hms(2018, 2, day, 9, 30, 0).single(),
        }
    }

    #[test]
    fn test_counts_per_day() {
        let mut open = done(4, 3);
        open.completed = false;
        let undated = TodoItem {
            completed_date: None,
            ..done(5, 1)
        };
        let histogram = completion_histogram(&[done(1, 2), done(2, 2), done(3, 1), open, undated]);
        let entries: Vec<_> = histogram.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                (NaiveDate::from_ymd_opt(2018, 2, 1).unwrap(), 1),
                (NaiveDate::from_ymd_opt(2018, 2, 2).unwrap(), 2),
            ]
        );
    }

    #[test]
    fn test_demo_data_totals_match() {
        let items = demo_items(&mut StdRng::seed_from_u64(5));
        let histogram = completion_histogram(&items);
        assert_eq!(histogram.values().sum::<usize>(), items.len());
        assert!(histogram.len() <= 28);
    }
}
