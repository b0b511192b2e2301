use chrono::{DateTime, Utc};
use sm2::{Grade, JsonStore, ReviewItem, ReviewStore, compute_stats, due_items, sort_by_due_date};

fn day(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| ms.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let now = Utc::now().timestamp_millis();
    let mut store = JsonStore::new(std::env::temp_dir().join("sm2-review-session.json"));

    // First run starts from an empty collection.
    let mut items = store.load()?;
    if items.is_empty() {
        for word in ["犬", "猫", "鳥", "magpie", "heron"] {
            items.push(ReviewItem::new(word, now));
        }
        println!("Seeded {} new items", items.len());
    }

    let stats = compute_stats(&items, now);
    println!(
        "{} items tracked, {} due today, {} due this week",
        stats.total_items, stats.due_today, stats.due_this_week
    );
    println!(
        "average easiness {:.2}, retention {}%",
        stats.average_easiness, stats.retention_rate
    );

    // Grade everything that is due, cycling through the four grades to
    // show how each reschedules.
    let grades = [Grade::Good, Grade::Easy, Grade::Hard, Grade::Again];
    let due = due_items(&items, now);
    println!("{} items due for review", due.len());
    for (item, grade) in due.iter().zip(grades.iter().cycle()) {
        let graded = item.advance(*grade, now);
        println!(
            "{}: {:?} -> next review in {} day(s) on {}",
            graded.id,
            grade,
            graded.interval,
            day(graded.due_date)
        );
        items.retain(|existing| existing.id != graded.id);
        items.push(graded);
    }

    store.save(&items)?;

    println!("Upcoming reviews:");
    for item in sort_by_due_date(&items) {
        println!("  {} due {}", item.id, day(item.due_date));
    }
    Ok(())
}
