pub mod engine;
pub mod memory;
pub mod persistence;

pub use engine::TaskStore;
pub use memory::MemoryStore;
pub use persistence::{FileStore, default_data_file};
