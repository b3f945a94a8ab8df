//! Task collection reducer.
//!
//! # Responsibility
//! - Own the ordered task collection.
//! - Apply `TaskAction`s and report what changed as a `TaskEffect`.
//!
//! # Invariants
//! - Collection is ordered most-recently-created first.
//! - No two live tasks share an `id`.
//! - Toggle never reorders; only add (prepend) and removal do.
//! - Unknown ids and blank titles are absorbed as `TaskEffect::NoOp`.

use crate::model::task::{normalize_title, Task, TaskId, TaskValidationError};
use crate::store::clock::{Clock, SystemClock};
use log::debug;
use serde::Serialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Mutations accepted by [`TaskStore::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// Create a task from raw user input.
    AddTask(String),
    /// Flip completion of one task.
    ToggleTask(TaskId),
    /// Delete one task.
    RemoveTask(TaskId),
    /// Delete every completed task.
    ClearCompleted,
}

/// Outcome of one reducer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEffect {
    /// Accepted, nothing changed.
    NoOp,
    /// A task was prepended.
    Added(TaskId),
    /// A task's completion flag flipped; `done` is the new value.
    Toggled { id: TaskId, done: bool },
    /// A task was removed.
    Removed(TaskId),
    /// Completed tasks were removed.
    Cleared { removed: usize },
}

impl TaskEffect {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// True only for a `false -> true` toggle.
    pub fn completed(&self) -> bool {
        matches!(self, Self::Toggled { done: true, .. })
    }

    /// Id of the task created by this step, if any.
    pub fn created(&self) -> Option<TaskId> {
        match self {
            Self::Added(id) => Some(*id),
            _ => None,
        }
    }
}

/// Aggregate counts over the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskSummary {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.done).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        }
    }
}

/// Broken collection invariant found by [`TaskStore::check_invariants`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    DuplicateId(TaskId),
    InvalidTask {
        id: TaskId,
        error: TaskValidationError,
    },
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate task id: {id}"),
            Self::InvalidTask { id, error } => write!(f, "invalid task {id}: {error}"),
        }
    }
}

impl Error for InvariantViolation {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidTask { error, .. } => Some(error),
            Self::DuplicateId(_) => None,
        }
    }
}

/// Sole owner of task records.
#[derive(Debug, Clone)]
pub struct TaskStore<C: Clock = SystemClock> {
    tasks: Vec<Task>,
    clock: C,
}

impl Default for TaskStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore<SystemClock> {
    /// Creates an empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> TaskStore<C> {
    /// Creates an empty store using the provided time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
        }
    }

    /// Applies one action and reports the resulting change.
    pub fn apply(&mut self, action: TaskAction) -> TaskEffect {
        match action {
            TaskAction::AddTask(raw_title) => self.add(&raw_title),
            TaskAction::ToggleTask(id) => self.toggle(id),
            TaskAction::RemoveTask(id) => self.remove(id),
            TaskAction::ClearCompleted => self.clear(),
        }
    }

    /// Prepends a task; `None` when the title is blank.
    pub fn add_task(&mut self, raw_title: &str) -> Option<TaskId> {
        self.apply(TaskAction::AddTask(raw_title.to_string())).created()
    }

    /// Flips `done`; returns `true` only for a `false -> true` transition.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        self.apply(TaskAction::ToggleTask(id)).completed()
    }

    /// Removes a task; returns whether it existed.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        !self.apply(TaskAction::RemoveTask(id)).is_noop()
    }

    /// Removes completed tasks; returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        match self.apply(TaskAction::ClearCompleted) {
            TaskEffect::Cleared { removed } => removed,
            _ => 0,
        }
    }

    /// Tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Completed tasks in collection order.
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(|task| task.done)
    }

    /// Pending tasks in collection order.
    pub fn pending_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(|task| !task.done)
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary::from_tasks(&self.tasks)
    }

    /// Verifies id uniqueness and per-task validity.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            task.validate().map_err(|error| InvariantViolation::InvalidTask {
                id: task.id,
                error,
            })?;
            if !seen.insert(task.id) {
                return Err(InvariantViolation::DuplicateId(task.id));
            }
        }
        Ok(())
    }

    fn add(&mut self, raw_title: &str) -> TaskEffect {
        let Some(title) = normalize_title(raw_title) else {
            debug!("event=task_add module=task_store status=noop reason=blank_title");
            return TaskEffect::NoOp;
        };

        let id = self.fresh_id();
        let task = Task {
            id,
            title,
            done: false,
            created_at: self.clock.now_epoch_ms(),
        };
        self.tasks.insert(0, task);
        TaskEffect::Added(id)
    }

    fn toggle(&mut self, id: TaskId) -> TaskEffect {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => TaskEffect::Toggled {
                id,
                done: task.toggle(),
            },
            None => {
                debug!("event=task_toggle module=task_store status=noop reason=unknown_id");
                TaskEffect::NoOp
            }
        }
    }

    fn remove(&mut self, id: TaskId) -> TaskEffect {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                TaskEffect::Removed(id)
            }
            None => {
                debug!("event=task_remove module=task_store status=noop reason=unknown_id");
                TaskEffect::NoOp
            }
        }
    }

    fn clear(&mut self) -> TaskEffect {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.done);
        match before - self.tasks.len() {
            0 => TaskEffect::NoOp,
            removed => TaskEffect::Cleared { removed },
        }
    }

    fn fresh_id(&self) -> TaskId {
        let mut id = Uuid::new_v4();
        while self.contains(id) {
            id = Uuid::new_v4();
        }
        id
    }
}
