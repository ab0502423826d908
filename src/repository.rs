//! Translating tasks to and from their stored representation

use crate::error::PersistenceError;
use crate::storage::KeyValueStore;
use crate::task::{Task, TaskId};

/// Prefix marking a store key as holding a task record
pub const TASK_KEY_PREFIX: &str = "task_";

/// Reads and writes [`Task`]s in a [`KeyValueStore`].
///
/// Each task is one JSON record under the key `task_<id>`. There is no index
/// or manifest entry: the task set is reconstructed by scanning the key space
/// for the prefix. Writes always replace the whole record, so a stored task is
/// never partial.
#[derive(Debug)]
pub struct TaskRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    fn key_for(id: &TaskId) -> String {
        format!("{}{}", TASK_KEY_PREFIX, id)
    }

    /// Persist `task`, replacing any previous record with the same id.
    pub async fn save(&mut self, task: &Task) -> Result<(), PersistenceError> {
        let record = serde_json::to_string(task).map_err(PersistenceError::Encode)?;
        self.store.set(&Self::key_for(task.id()), &record).await
    }

    /// Delete the record for `id`. Removing a task that is not stored is not
    /// an error.
    pub async fn remove(&mut self, id: &TaskId) -> Result<(), PersistenceError> {
        self.store.remove(&Self::key_for(id)).await
    }

    /// Return every stored task, in no particular order.
    ///
    /// A record that does not parse as a task is logged and skipped, so one
    /// corrupt entry never makes the whole listing fail. An empty store yields
    /// an empty list, not an error.
    pub async fn list_all(&self) -> Result<Vec<Task>, PersistenceError> {
        let mut tasks = Vec::new();
        for key in self.store.keys().await? {
            if !key.starts_with(TASK_KEY_PREFIX) {
                continue;
            }
            let record = match self.store.get(&key).await? {
                Some(record) => record,
                None => continue,
            };
            match serde_json::from_str(&record) {
                Ok(task) => tasks.push(task),
                Err(err) => log::warn!("Skipping stored record {:?} that does not parse as a task: {}", key, err),
            }
        }
        Ok(tasks)
    }
}
