//! # Storage Layer
//!
//! The persistence adapter for educheck: a namespaced key-value store
//! mapping a string key to a serialized blob. The [`StorageBackend`] trait
//! allows the engine to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (browser storage, database, etc.) without
//!   changing core logic
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage, one `<key>.json`
//!   file per key under a root directory
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Key Layout
//!
//! Keys are namespaced per user by [`crate::session::Session`]:
//! ```text
//! checklists_<userId>     # JSON array of the user's full collection
//! notifications_<userId>  # JSON notification settings
//! ```
//!
//! The collection is overwritten wholesale on every mutation. Operations are
//! synchronous and there are no transactions across keys.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract synchronous key-value persistence.
pub trait StorageBackend {
    /// Read the blob stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (or overwrite) the blob stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the blob stored under `key`. Deleting a missing key is fine.
    fn remove(&mut self, key: &str) -> Result<()>;
}
