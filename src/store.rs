use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;
use snafu::ResultExt;

use crate::error::{LoadItemsSnafu, MalformedCollectionSnafu, Result, SaveItemsSnafu};
use crate::scheduler::ReviewItem;

/// Persistence boundary for a collection of review items. The scheduler
/// itself never touches storage; callers load a collection, grade items
/// against it, and hand the updated values back. Serializing concurrent
/// read-modify-write cycles per item id is the caller's responsibility.
pub trait ReviewStore {
    fn load(&self) -> Result<Vec<ReviewItem>>;
    fn save(&mut self, items: &[ReviewItem]) -> Result<()>;
}

/// In-memory store for tests and short-lived sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Vec<ReviewItem>,
}

impl ReviewStore for MemoryStore {
    fn load(&self) -> Result<Vec<ReviewItem>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, items: &[ReviewItem]) -> Result<()> {
        self.items = items.to_vec();
        Ok(())
    }
}

/// Whole-collection JSON blob on disk. Writes replace the file; the
/// last writer wins.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReviewStore for JsonStore {
    fn load(&self) -> Result<Vec<ReviewItem>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            // A store that has never been saved is an empty collection.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e).context(LoadItemsSnafu),
        };
        let items: Vec<ReviewItem> =
            serde_json::from_str(&data).context(MalformedCollectionSnafu)?;
        info!("loaded {} items from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn save(&mut self, items: &[ReviewItem]) -> Result<()> {
        let data = serde_json::to_string(items).context(MalformedCollectionSnafu)?;
        fs::write(&self.path, data).context(SaveItemsSnafu)?;
        info!("saved {} items to {}", items.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Sm2Error;
    use crate::queue::due_items;
    use crate::scheduler::{Grade, MS_PER_DAY};

    const NOW: i64 = 1_000_000;

    fn collection() -> Vec<ReviewItem> {
        vec![ReviewItem::new("word-1", NOW), ReviewItem::new("kanji-1", NOW)]
    }

    #[test]
    fn memory_store_roundtrip() -> Result<()> {
        let mut store = MemoryStore::default();
        assert!(store.load()?.is_empty());

        let items = collection();
        store.save(&items)?;
        assert_eq!(store.load()?, items);
        Ok(())
    }

    #[test]
    fn json_store_roundtrip() -> Result<()> {
        let path = std::env::temp_dir().join("sm2-store-roundtrip.json");
        let mut store = JsonStore::new(&path);

        let items = collection();
        store.save(&items)?;
        assert_eq!(store.load()?, items);

        fs::remove_file(&path).ok();
        Ok(())
    }

    #[test]
    fn missing_file_loads_as_empty_collection() -> Result<()> {
        let store = JsonStore::new(std::env::temp_dir().join("sm2-store-missing.json"));
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_blob_is_a_recoverable_error() {
        let path = std::env::temp_dir().join("sm2-store-malformed.json");
        fs::write(&path, "not json").unwrap();

        let err = JsonStore::new(&path).load().unwrap_err();
        assert!(matches!(err, Sm2Error::MalformedCollection { .. }));

        fs::remove_file(&path).ok();
    }

    // The full load -> select due -> grade -> persist cycle the engine
    // is embedded in.
    #[test]
    fn grading_cycle_through_store() -> Result<()> {
        let mut store = MemoryStore::default();
        store.save(&collection())?;

        let mut items = store.load()?;
        let due = due_items(&items, NOW);
        assert_eq!(due.len(), 2);

        let graded = due[0].advance(Grade::Good, NOW);
        items.retain(|item| item.id != graded.id);
        items.push(graded);
        store.save(&items)?;

        let reloaded = store.load()?;
        assert_eq!(due_items(&reloaded, NOW).len(), 1);
        assert_eq!(due_items(&reloaded, NOW + MS_PER_DAY).len(), 2);
        Ok(())
    }
}
