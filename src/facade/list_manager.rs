use crate::core::Item;
use crate::result::Outcome;
use crate::storage::TaskStore;
use tracing::{debug, warn};

/// Owner of the task list.
///
/// Holds the authoritative in-memory collection and pushes the full list to
/// the configured store after every mutation. Indices are zero-based positions
/// into the current order and shift down after a delete.
///
/// # Examples
///
/// ```
/// use tasklist::{ListManager, MemoryStore, Outcome};
///
/// let mut manager = ListManager::new(Box::new(MemoryStore::new()));
/// assert_eq!(manager.add("Buy milk"), Outcome::Success);
/// assert_eq!(manager.toggle_completion(0), Outcome::Success);
/// assert!(manager.list()[0].is_completed());
/// assert_eq!(manager.delete(5), Outcome::IndexNotFound);
/// ```
pub struct ListManager {
    items: Vec<Item>,
    store: Box<dyn TaskStore>,
}

impl ListManager {
    /// Build a manager on top of `store`, adopting whatever it last saved.
    pub fn new(store: Box<dyn TaskStore>) -> Self {
        let items = store.load().unwrap_or_default();
        debug!(store = %store.describe(), count = items.len(), "task list opened");
        Self { items, store }
    }

    pub fn add(&mut self, title: impl Into<String>) -> Outcome {
        let item = Item::new(title);
        debug!(id = %item.id(), title = item.title(), "adding task");
        self.items.push(item);
        self.sync()
    }

    /// Copy of the current list.
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Read-only view of the current list.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn toggle_completion(&mut self, index: usize) -> Outcome {
        let Some(item) = self.items.get_mut(index) else {
            return Outcome::IndexNotFound;
        };
        item.toggle();
        debug!(index, id = %item.id(), completed = item.is_completed(), "toggled task");
        self.sync()
    }

    pub fn delete(&mut self, index: usize) -> Outcome {
        if index >= self.items.len() {
            return Outcome::IndexNotFound;
        }
        let removed = self.items.remove(index);
        debug!(index, id = %removed.id(), "deleted task");
        self.sync()
    }

    pub fn store_description(&self) -> String {
        self.store.describe()
    }

    fn sync(&mut self) -> Outcome {
        match self.store.save(&self.items) {
            Ok(()) => Outcome::Success,
            Err(e) => {
                warn!(store = %self.store.describe(), error = %e, "task list not persisted");
                Outcome::PersistenceFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Result, StoreError};
    use crate::storage::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Store whose saves always fail, counting how often it was asked.
    struct BrokenStore {
        saves: Arc<AtomicUsize>,
    }

    impl TaskStore for BrokenStore {
        fn save(&mut self, _items: &[Item]) -> Result<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::DataDirUnavailable)
        }

        fn load(&self) -> Option<Vec<Item>> {
            None
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn manager_with(titles: &[&str]) -> ListManager {
        let mut manager = ListManager::new(Box::new(MemoryStore::new()));
        for title in titles {
            assert_eq!(manager.add(*title), Outcome::Success);
        }
        manager
    }

    #[test]
    fn test_starts_empty_without_saved_data() {
        let manager = ListManager::new(Box::new(MemoryStore::new()));
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn test_adopts_loaded_items() {
        let seeded = vec![Item::new("one"), Item::new("two")];
        let manager = ListManager::new(Box::new(MemoryStore::with_items(seeded.clone())));
        assert_eq!(manager.list(), seeded);
    }

    #[test]
    fn test_add_preserves_order() {
        let manager = manager_with(&["a", "b", "c"]);
        let titles: Vec<&str> = manager.items().iter().map(Item::title).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut manager = manager_with(&["a", "b"]);
        assert_eq!(manager.toggle_completion(1), Outcome::Success);
        assert!(manager.get(1).unwrap().is_completed());
        assert!(!manager.get(0).unwrap().is_completed());
        assert_eq!(manager.toggle_completion(1), Outcome::Success);
        assert!(!manager.get(1).unwrap().is_completed());
    }

    #[test]
    fn test_out_of_range_is_not_found() {
        let mut manager = manager_with(&["a"]);
        let before = manager.list();
        assert_eq!(manager.toggle_completion(1), Outcome::IndexNotFound);
        assert_eq!(manager.delete(1), Outcome::IndexNotFound);
        assert_eq!(manager.toggle_completion(usize::MAX), Outcome::IndexNotFound);
        assert_eq!(manager.list(), before);
    }

    #[test]
    fn test_delete_shifts_following_items() {
        let mut manager = manager_with(&["a", "b", "c"]);
        assert_eq!(manager.delete(0), Outcome::Success);
        assert_eq!(manager.get(0).unwrap().title(), "b");
        assert_eq!(manager.get(1).unwrap().title(), "c");
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_failed_save_still_applies_in_memory() {
        let saves = Arc::new(AtomicUsize::new(0));
        let mut manager = ListManager::new(Box::new(BrokenStore {
            saves: Arc::clone(&saves),
        }));

        assert_eq!(manager.add("kept in memory"), Outcome::PersistenceFailed);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.toggle_completion(0), Outcome::PersistenceFailed);
        assert!(manager.get(0).unwrap().is_completed());
        assert_eq!(manager.delete(0), Outcome::PersistenceFailed);
        assert!(manager.is_empty());
        assert_eq!(saves.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_rejected_index_does_not_save() {
        let saves = Arc::new(AtomicUsize::new(0));
        let mut manager = ListManager::new(Box::new(BrokenStore {
            saves: Arc::clone(&saves),
        }));

        assert_eq!(manager.toggle_completion(0), Outcome::IndexNotFound);
        assert_eq!(manager.delete(0), Outcome::IndexNotFound);
        assert_eq!(saves.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_list_is_a_copy() {
        let manager = manager_with(&["a"]);
        let mut copy = manager.list();
        copy[0].toggle();
        copy.clear();
        assert_eq!(manager.len(), 1);
        assert!(!manager.get(0).unwrap().is_completed());
    }
}
