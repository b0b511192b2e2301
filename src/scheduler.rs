use serde::{Deserialize, Serialize};
use strum::{EnumIter, FromRepr};

pub(crate) const MS_PER_DAY: i64 = 86_400_000;
pub(crate) const INITIAL_EASINESS: f64 = 2.5;
pub(crate) const MIN_EASINESS: f64 = 1.3;

/// Self-assessed recall quality for one review event. `Good` and `Easy`
/// extend the repetition streak; `Again` and `Hard` reset it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, EnumIter, FromRepr, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Grade {
    Again = 0,
    Hard = 1,
    Good = 2,
    Easy = 3,
}

impl Grade {
    pub fn is_success(self) -> bool {
        self >= Grade::Good
    }

    // Ordinal fed to the easiness formula, clamped to the range the
    // formula is defined on.
    fn quality(self) -> f64 {
        (self as u8).min(3) as f64
    }
}

/// Per-item spaced-repetition state. The `id` correlates the item with
/// the learnable content (word, kanji) stored elsewhere; the engine
/// never looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewItem {
    pub id: String,
    /// Grows with successful recalls, never drops below 1.3.
    pub easiness_factor: f64,
    /// Days until the next scheduled review.
    pub interval: u32,
    /// Consecutive successful reviews since the last lapse.
    pub repetitions: u32,
    /// Milliseconds since the epoch; eligible for review once `now`
    /// reaches this.
    pub due_date: i64,
    /// Milliseconds since the epoch of the latest grading event, or of
    /// creation when never reviewed.
    pub last_reviewed: i64,
}

impl ReviewItem {
    pub fn new(id: impl Into<String>, now: i64) -> Self {
        Self {
            id: id.into(),
            easiness_factor: INITIAL_EASINESS,
            interval: 0,
            repetitions: 0,
            due_date: now,
            last_reviewed: now,
        }
    }

    pub fn is_due(&self, now: i64) -> bool {
        now >= self.due_date
    }

    /// Computes the state after grading this item at `now`. The input is
    /// left untouched; callers hand the returned value back to their
    /// store.
    pub fn advance(&self, grade: Grade, now: i64) -> ReviewItem {
        let easiness = next_easiness(self.easiness_factor, grade.quality());
        let (repetitions, interval) = if grade.is_success() {
            let repetitions = self.repetitions + 1;
            let interval = match repetitions {
                1 => 1,
                2 => 6,
                // Multiplies the previous interval, so an item constructed
                // externally with interval 0 and repetitions >= 2 stays
                // due immediately.
                _ => (self.interval as f64 * easiness).round() as u32,
            };
            (repetitions, interval)
        } else {
            (0, 1)
        };
        ReviewItem {
            id: self.id.clone(),
            easiness_factor: easiness,
            interval,
            repetitions,
            due_date: now + i64::from(interval) * MS_PER_DAY,
            last_reviewed: now,
        }
    }
}

fn next_easiness(easiness: f64, q: f64) -> f64 {
    (easiness + (0.1 - (3.0 - q) * (0.08 + (3.0 - q) * 0.02))).max(MIN_EASINESS)
}
