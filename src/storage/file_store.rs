//! A store that persists its entries in a local JSON file

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::storage::KeyValueStore;

/// A [`KeyValueStore`] backed by a single JSON file.
///
/// The whole store is loaded when it is opened and written back on every
/// mutation, which is fine for the few dozen entries a task list holds.
#[derive(Debug, PartialEq)]
pub struct FileStore {
    backing_file: PathBuf,
    data: StoredData,
}

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct StoredData {
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Initialize a store from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, PersistenceError> {
        let file = std::fs::File::open(path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = serde_json::from_reader(file).map_err(|source| PersistenceError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            backing_file: path.to_path_buf(),
            data,
        })
    }

    /// Initialize an empty store that will be saved to `path`
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: path.to_path_buf(),
            data: StoredData::default(),
        }
    }

    /// Load the backing file, or start an empty store when there is none yet
    pub fn open(path: &Path) -> Result<Self, PersistenceError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("No backing file at {:?} yet, starting empty", path);
            Ok(Self::new(path))
        }
    }

    /// Path of the backing file
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }

    /// Write the current contents to the backing file
    fn save_to_file(&self) -> Result<(), PersistenceError> {
        let file = std::fs::File::create(&self.backing_file).map_err(|source| PersistenceError::Io {
            path: self.backing_file.clone(),
            source,
        })?;
        serde_json::to_writer(file, &self.data).map_err(PersistenceError::Encode)?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.data.entries.get(key).cloned())
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let previous = self.data.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.save_to_file() {
            // The mutation never reached the disk, so it must not stay
            // visible in memory either
            match previous {
                Some(previous) => self.data.entries.insert(key.to_string(), previous),
                None => self.data.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        let previous = self.data.entries.remove(key);
        if let Err(err) = self.save_to_file() {
            if let Some(previous) = previous {
                self.data.entries.insert(key.to_string(), previous);
            }
            return Err(err);
        }
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, PersistenceError> {
        Ok(self.data.entries.keys().cloned().collect())
    }
}
