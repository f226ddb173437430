use super::TaskStore;
use crate::core::{Item, Result};

/// Volatile store: the snapshot lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// `None` until the first save
    items: Option<Vec<Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { items: None }
    }

    /// Start with a snapshot already present, as if it had been saved.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self { items: Some(items) }
    }
}

impl TaskStore for MemoryStore {
    fn save(&mut self, items: &[Item]) -> Result<()> {
        self.items = Some(items.to_vec());
        Ok(())
    }

    fn load(&self) -> Option<Vec<Item>> {
        self.items.clone()
    }

    fn describe(&self) -> String {
        "in-memory (not persisted)".to_string()
    }
}
