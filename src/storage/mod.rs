//! The key-value stores tasks are persisted in

use async_trait::async_trait;

use crate::error::PersistenceError;

pub mod file_store;
pub mod memory_store;

/// An async, string-keyed, string-valued persistent dictionary.
///
/// Every operation is atomic at single-key granularity. There are no
/// transactions spanning multiple keys, no timeouts and no cancellation:
/// operations run to completion or fail outright.
#[async_trait]
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` when there is none
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Deletes `key`. Removing a key that is not stored is not an error
    async fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;

    /// Lists every key currently in the store, in no particular order
    async fn keys(&self) -> Result<Vec<String>, PersistenceError>;
}
