//! Headless state for the four screens of the app
//!
//! Rendering and input handling are left to the caller (the `corkboard`
//! binary, or tests). Each struct here holds one screen's local state and runs
//! its flow against a [`TaskRepository`]; navigation is expressed by returning
//! the [`Route`] the caller should go to next. There is no state machine
//! beyond these linear flows, and the UI is expected to keep at most one
//! operation in flight per screen.

use crate::error::{Error, PersistenceError};
use crate::repository::TaskRepository;
use crate::sort::{sort_tasks, SortKey};
use crate::storage::KeyValueStore;
use crate::task::{Task, TaskDraft, TaskStatus};

/// The four navigation destinations.
///
/// Detail and Edit receive their task by value: the screens never share
/// mutable state, they only meet again through the store.
#[derive(Clone, Debug)]
pub enum Route {
    TaskList,
    TaskDetail(Task),
    EditTask(Task),
    AddTask,
}

/// The task list, with its current sort option.
#[derive(Debug)]
pub struct ListScreen {
    sort_option: SortKey,
    tasks: Vec<Task>,
}

impl ListScreen {
    pub fn new() -> Self {
        Self {
            sort_option: SortKey::Date,
            tasks: Vec::new(),
        }
    }

    /// Reload the tasks from the repository.
    ///
    /// Called on entry and every time the screen regains focus, so that edits
    /// and deletions made on other screens show up.
    pub async fn refresh<S: KeyValueStore>(
        &mut self,
        repository: &TaskRepository<S>,
    ) -> Result<(), PersistenceError> {
        self.tasks = repository.list_all().await?;
        Ok(())
    }

    pub fn sort_option(&self) -> SortKey {
        self.sort_option
    }

    pub fn set_sort_option(&mut self, sort_option: SortKey) {
        self.sort_option = sort_option;
    }

    /// The loaded tasks, ordered by the current sort option
    pub fn sorted_tasks(&self) -> Vec<Task> {
        sort_tasks(&self.tasks, self.sort_option)
    }

    pub fn open_detail(&self, task: Task) -> Route {
        Route::TaskDetail(task)
    }

    pub fn open_add(&self) -> Route {
        Route::AddTask
    }
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// The form for creating a new task.
#[derive(Debug, Default)]
pub struct AddScreen {
    form: TaskDraft,
}

impl AddScreen {
    pub fn new() -> Self {
        Self {
            form: TaskDraft::new(),
        }
    }

    pub fn form(&self) -> &TaskDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskDraft {
        &mut self.form
    }

    /// Validate the form and save the new task.
    ///
    /// On success the form is reset for the next task and navigation goes
    /// back to the list. On failure nothing is written: validation happens
    /// before the save, and a failed save is a single atomic key write that
    /// did not happen.
    pub async fn submit<S: KeyValueStore>(
        &mut self,
        repository: &mut TaskRepository<S>,
    ) -> Result<Route, Error> {
        let task = self.form.submit()?;
        repository.save(&task).await?;
        log::info!("Task {:?} added as {}", task.title(), task.id());
        self.form = TaskDraft::new();
        Ok(Route::TaskList)
    }
}

/// A single task, with immediate status updates and deletion.
#[derive(Debug)]
pub struct DetailScreen {
    task: Task,
}

impl DetailScreen {
    pub fn new(task: Task) -> Self {
        Self { task }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Change the status and persist the task right away
    pub async fn set_status<S: KeyValueStore>(
        &mut self,
        status: TaskStatus,
        repository: &mut TaskRepository<S>,
    ) -> Result<(), PersistenceError> {
        self.task.set_status(status);
        repository.save(&self.task).await
    }

    pub fn edit(&self) -> Route {
        Route::EditTask(self.task.clone())
    }

    /// Delete the task and go back to the list.
    ///
    /// The caller is expected to have asked the user for confirmation first;
    /// this method deletes unconditionally.
    pub async fn remove<S: KeyValueStore>(
        &self,
        repository: &mut TaskRepository<S>,
    ) -> Result<Route, PersistenceError> {
        repository.remove(self.task.id()).await?;
        log::info!("Task {} removed", self.task.id());
        Ok(Route::TaskList)
    }
}

/// The form for editing an existing task.
///
/// Keeps the task's id, so submitting overwrites the stored record in place.
#[derive(Debug)]
pub struct EditScreen {
    form: TaskDraft,
}

impl EditScreen {
    pub fn new(task: &Task) -> Self {
        Self {
            form: TaskDraft::from_task(task),
        }
    }

    pub fn form(&self) -> &TaskDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskDraft {
        &mut self.form
    }

    /// Validate the form and overwrite the stored task, then go back to the list
    pub async fn submit<S: KeyValueStore>(
        &mut self,
        repository: &mut TaskRepository<S>,
    ) -> Result<Route, Error> {
        let task = self.form.submit()?;
        repository.save(&task).await?;
        Ok(Route::TaskList)
    }
}
