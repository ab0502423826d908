//! Tasks and the form state that creates them

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::error::ValidationError;

/// The opaque identifier of a task.
///
/// It is assigned once, when the task is first created, and never changes. It
/// also serves as the suffix of the store key the task is persisted under.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId {
    content: String,
}

impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        Self {
            content: Uuid::new_v4().to_hyphenated().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl FromStr for TaskId {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            content: s.to_string(),
        })
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// The status of a task.
///
/// A task starts `Unset` and is forced to `InProgress` by the first field edit
/// during creation (see [`TaskDraft`]). Afterwards it can be set freely.
///
/// The serialized forms (`""`, `"In-progress"`, `"Completed"`, `"Cancelled"`)
/// are also what [`sort_tasks`](crate::sort::sort_tasks) compares, so sorting
/// by status is alphabetical, not workflow order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "In-progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl TaskStatus {
    /// The exact string this status is persisted (and compared) as
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Unset => "",
            TaskStatus::InProgress => "In-progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Unset
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown status {0:?} (expected In-progress, Completed or Cancelled)")]
pub struct UnknownStatus(String);

impl FromStr for TaskStatus {
    type Err = UnknownStatus;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Ok(TaskStatus::Unset),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// A single to-do record.
///
/// Apart from the status, every field is a free-form string: dates and times
/// are whatever the producer typed (by convention `YYYY-MM-DD` and `HH:MM`),
/// not structured calendar types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique, immutable identifier
    id: TaskId,
    title: String,
    description: String,
    date: String,
    time: String,
    location: String,
    status: TaskStatus,
}

impl Task {
    /// Create a task from already-validated fields.
    ///
    /// Most callers should go through [`TaskDraft::submit`] instead, which
    /// also enforces the required-field rules.
    pub fn new_with_fields(
        id: TaskId,
        title: String,
        description: String,
        date: String,
        time: String,
        location: String,
        status: TaskStatus,
    ) -> Self {
        Self {
            id,
            title,
            description,
            date,
            time,
            location,
            status,
        }
    }

    pub fn id(&self) -> &TaskId { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn description(&self) -> &str { &self.description }
    pub fn date(&self) -> &str { &self.date }
    pub fn time(&self) -> &str { &self.time }
    pub fn location(&self) -> &str { &self.location }
    pub fn status(&self) -> TaskStatus { self.status }

    /// Change the status. The id and every other field stay untouched.
    pub fn set_status(&mut self, new_status: TaskStatus) {
        self.status = new_status;
    }
}

/// The form state behind the Add and Edit screens.
///
/// A fresh draft gets a random id and an `Unset` status; the first field edit
/// flips the status to `In-progress`. A draft built from an existing task
/// keeps that task's id and status, so editing never resets either.
#[derive(Clone, Debug)]
pub struct TaskDraft {
    id: TaskId,
    title: String,
    description: String,
    date: String,
    time: String,
    location: String,
    status: TaskStatus,
}

impl TaskDraft {
    /// An empty form for a brand new task. This picks the task's (final) id.
    pub fn new() -> Self {
        Self {
            id: TaskId::random(),
            title: String::new(),
            description: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            status: TaskStatus::Unset,
        }
    }

    /// A form pre-filled from an existing task, for the Edit flow.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            date: task.date.clone(),
            time: task.time.clone(),
            location: task.location.clone(),
            status: task.status,
        }
    }

    pub fn id(&self) -> &TaskId { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn description(&self) -> &str { &self.description }
    pub fn date(&self) -> &str { &self.date }
    pub fn time(&self) -> &str { &self.time }
    pub fn location(&self) -> &str { &self.location }
    pub fn status(&self) -> TaskStatus { self.status }

    // An Unset status becomes In-progress as soon as the user touches a field.
    // Drafts for existing tasks already have a status, which is kept.
    fn touch(&mut self) {
        if self.status == TaskStatus::Unset {
            self.status = TaskStatus::InProgress;
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.touch();
        self.title = title;
    }
    pub fn set_description(&mut self, description: String) {
        self.touch();
        self.description = description;
    }
    pub fn set_date(&mut self, date: String) {
        self.touch();
        self.date = date;
    }
    pub fn set_time(&mut self, time: String) {
        self.touch();
        self.time = time;
    }
    pub fn set_location(&mut self, location: String) {
        self.touch();
        self.location = location;
    }
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Check the required fields and turn the draft into a [`Task`].
    ///
    /// Every field must be non-empty; the first empty one is reported and
    /// nothing is built.
    pub fn submit(&self) -> Result<Task, ValidationError> {
        let required: [(&'static str, &str); 5] = [
            ("title", &self.title),
            ("description", &self.description),
            ("date", &self.date),
            ("time", &self.time),
            ("location", &self.location),
        ];
        for &(field, value) in required.iter() {
            if value.is_empty() {
                return Err(ValidationError { field });
            }
        }

        Ok(Task::new_with_fields(
            self.id.clone(),
            self.title.clone(),
            self.description.clone(),
            self.date.clone(),
            self.time.clone(),
            self.location.clone(),
            self.status,
        ))
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self::new()
    }
}
