pub mod error;
pub mod item;

pub use error::{Result, StoreError};
pub use item::Item;
