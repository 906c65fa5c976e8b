pub mod db;
pub mod memory;
pub mod types;

pub use db::RedbHashStore;
pub use memory::MemoryHashStore;
pub use types::{HashStore, HashStoreConfig, StoreError};
