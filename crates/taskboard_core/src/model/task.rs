//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record owned by the task store.
//! - Normalize and validate titles at construction time.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is trimmed and non-empty.
//! - `done` is the only field that changes after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation failures for task construction and decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Nil UUID is reserved and cannot identify a task.
    NilId,
    /// Title is empty after trimming whitespace.
    EmptyTitle,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyTitle => write!(f, "task title must not be empty after trimming"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single user-entered to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    /// Stable identity, generated once at creation.
    pub id: TaskId,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Completion flag. Starts as `false`.
    pub done: bool,
    /// Unix epoch milliseconds captured at creation.
    pub created_at: i64,
}

/// Unvalidated wire shape; decoding goes through `Task::validate()`.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    done: bool,
    created_at: i64,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(value: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Task::with_id(value.id, value.title, value.created_at)?;
        task.done = value.done;
        Ok(task)
    }
}

impl Task {
    /// Creates a pending task with a freshly generated ID.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is blank after trimming.
    pub fn new(title: &str, created_at: i64) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title, created_at)
    }

    /// Creates a pending task with a caller-provided ID.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyTitle` when `title` is blank after trimming.
    pub fn with_id(
        id: TaskId,
        title: impl AsRef<str>,
        created_at: i64,
    ) -> Result<Self, TaskValidationError> {
        let title = normalize_title(title.as_ref()).ok_or(TaskValidationError::EmptyTitle)?;
        let task = Self {
            id,
            title,
            done: false,
            created_at,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks identity and title invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Flips completion and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.done = !self.done;
        self.done
    }
}

/// Returns the trimmed title, or `None` when nothing but whitespace remains.
pub fn normalize_title(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
