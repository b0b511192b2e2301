mod error;
mod queue;
mod scheduler;
mod stats;
mod store;

pub use error::{Result, Sm2Error};
pub use queue::{due_items, sort_by_due_date};
pub use scheduler::{Grade, ReviewItem};
pub use stats::{ReviewStats, compute_stats};
pub use store::{JsonStore, MemoryStore, ReviewStore};
