use itertools::Itertools;

use crate::scheduler::ReviewItem;

/// Items eligible for review at `now`, in their original relative order.
pub fn due_items(items: &[ReviewItem], now: i64) -> Vec<ReviewItem> {
    items
        .iter()
        .filter(|item| item.is_due(now))
        .cloned()
        .collect()
}

/// Ascending by due date, leaving the input untouched. The sort is
/// stable: items sharing a due date keep their relative order.
pub fn sort_by_due_date(items: &[ReviewItem]) -> Vec<ReviewItem> {
    items
        .iter()
        .cloned()
        .sorted_by_key(|item| item.due_date)
        .collect()
}
