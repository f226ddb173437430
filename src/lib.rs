// ============================================================================
// Tasklist Library
// ============================================================================

pub mod config;
pub mod core;
pub mod facade;
pub mod result;
pub mod storage;

// Re-export main types for convenience
pub use config::{AppConfig, StoreKind};
pub use core::{Item, Result, StoreError};
pub use facade::ListManager;
pub use result::Outcome;
pub use storage::{FileStore, MemoryStore, TaskStore};

/// Open a list manager wired to the store described by `config`.
///
/// # Examples
///
/// ```
/// use tasklist::{AppConfig, StoreKind};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut manager = tasklist::open(&AppConfig::new().store(StoreKind::Memory))?;
/// assert!(manager.add("Water the plants").is_success());
/// assert_eq!(manager.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn open(config: &AppConfig) -> Result<ListManager> {
    Ok(ListManager::new(config.build_store()?))
}
