mod file_store;
mod memory_store;
mod trait_def;

pub use file_store::{FileKeyValueStore, DEFAULT_STORE_FILE_NAME};
pub use memory_store::MemoryKeyValueStore;
pub use trait_def::{KeyValueStore, StoreError};
