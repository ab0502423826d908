//! The errors a user action can end with.
//!
//! Every error here is terminal to the action that triggered it: there is no
//! retry or backoff anywhere, and since store writes are atomic at single-key
//! granularity a failed action never leaves a partial record behind.

use std::path::PathBuf;

use thiserror::Error;

/// A required form field was left empty.
///
/// Submission is blocked and nothing is written to the store.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("the `{field}` field must not be empty")]
pub struct ValidationError {
    /// Name of the offending field
    pub field: &'static str,
}

/// The underlying store could not complete a read, write or delete.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the backing file failed
    #[error("unable to access the backing file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing data for storage failed
    #[error("unable to encode data for storage: {0}")]
    Encode(#[source] serde_json::Error),

    /// The backing file exists but does not contain a valid store
    #[error("the backing file {path:?} is not a valid store: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Any way a screen flow can fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
