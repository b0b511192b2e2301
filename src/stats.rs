use serde::Serialize;

use crate::scheduler::{MS_PER_DAY, ReviewItem};

trait Round {
    fn to_2_decimal(self) -> f64;
}

impl Round for f64 {
    fn to_2_decimal(self) -> f64 {
        (self * 100.0).round() / 100.0
    }
}

/// Read-only projection over a collection of review items, recomputed
/// on demand for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total_items: usize,
    pub due_today: usize,
    /// Due within the next seven days, counted cumulatively: everything
    /// already overdue is included too.
    pub due_this_week: usize,
    pub average_easiness: f64,
    /// Percentage of items reviewed successfully at least once.
    pub retention_rate: f64,
}

pub fn compute_stats(items: &[ReviewItem], now: i64) -> ReviewStats {
    let total_items = items.len();
    if total_items == 0 {
        return ReviewStats {
            total_items: 0,
            due_today: 0,
            due_this_week: 0,
            average_easiness: 0.0,
            retention_rate: 0.0,
        };
    }

    let week_cutoff = now + 7 * MS_PER_DAY;
    let due_today = items.iter().filter(|item| item.due_date <= now).count();
    let due_this_week = items
        .iter()
        .filter(|item| item.due_date <= week_cutoff)
        .count();
    let average_easiness =
        items.iter().map(|item| item.easiness_factor).sum::<f64>() / total_items as f64;
    let reviewed = items.iter().filter(|item| item.repetitions > 0).count();
    let retention_rate = (100.0 * reviewed as f64 / total_items as f64).to_2_decimal();

    ReviewStats {
        total_items,
        due_today,
        due_this_week,
        average_easiness,
        retention_rate,
    }
}
