//! # storage-adapters
//!
//! `KeyValueStore` implementations the binary can choose between.

#[cfg(feature = "storage-file")]
pub mod file;
pub mod memory;

#[cfg(feature = "storage-file")]
pub use file::FileStore;
pub use memory::MemoryStore;
