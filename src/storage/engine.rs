use crate::core::{Item, Result};

/// Storage engine trait - allows pluggable persistence backends
pub trait TaskStore: Send + Sync {
    /// Persist the entire collection, replacing whatever was stored before.
    ///
    /// On error the previously persisted state is left untouched.
    fn save(&mut self, items: &[Item]) -> Result<()>;

    /// Return the last saved collection, or `None` if nothing usable was ever saved.
    fn load(&self) -> Option<Vec<Item>>;

    /// Human readable location of the stored data
    fn describe(&self) -> String;
}
