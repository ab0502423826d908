//! This crate is a small task-management core: create, list, sort, view, edit
//! and delete tasks, each with a title, description, date, time, location and
//! status.
//!
//! Tasks are persisted in a local key-value store (the [`storage`] module),
//! one JSON record per task under a `task_<id>` key. The [`repository`] module
//! translates between [`Task`]s and those records, and the [`sort`] module
//! orders loaded lists for display. \
//! The [`screens`] module holds the per-screen flows (List, Add, Detail,
//! Edit) in a headless form, so a front-end only has to render their state
//! and forward user input. The `corkboard` binary is one such front-end.
//!
//! There is no network, no multi-user concern and no background processing:
//! everything happens on behalf of one user action at a time.

pub mod error;
pub use error::{Error, PersistenceError, ValidationError};

pub mod task;
pub use task::{Task, TaskDraft, TaskId, TaskStatus, UnknownStatus};

pub mod storage;
pub use storage::file_store::FileStore;
pub use storage::memory_store::MemoryStore;
pub use storage::KeyValueStore;

pub mod repository;
pub use repository::TaskRepository;

pub mod sort;
pub use sort::{sort_tasks, SortKey};

pub mod screens;
