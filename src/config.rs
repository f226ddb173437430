use crate::core::Result;
use crate::storage::{FileStore, MemoryStore, TaskStore, default_data_file};
use std::path::PathBuf;

/// Which persistence backend the list manager should be wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StoreKind {
    /// JSON file in the per-user data directory
    #[default]
    File,
    /// Keep tasks in memory only; everything is lost on exit
    Memory,
}

/// Application configuration
///
/// Built with chained setters, the same way from the command line or from tests.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Selected backend
    pub store: StoreKind,

    /// Explicit data file; `None` means the per-user default location
    pub data_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend
    pub fn store(mut self, store: StoreKind) -> Self {
        self.store = store;
        self
    }

    /// Use a specific data file instead of the default location
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    /// Resolve the data file path, falling back to the per-user default
    pub fn resolved_data_file(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => default_data_file(),
        }
    }

    /// Construct the configured store
    pub fn build_store(&self) -> Result<Box<dyn TaskStore>> {
        match self.store {
            StoreKind::File => Ok(Box::new(FileStore::new(self.resolved_data_file()?))),
            StoreKind::Memory => Ok(Box::new(MemoryStore::new())),
        }
    }
}
