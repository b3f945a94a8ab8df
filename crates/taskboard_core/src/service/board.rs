//! Dispatch coordinator over the task and flag stores.
//!
//! # Responsibility
//! - Own both stores and apply one external `Intent` per dispatch.
//! - Derive the cross-store transition: completing a task shows the
//!   done notification in the same step.
//! - Publish post-transition snapshots to subscribers.
//!
//! # Invariants
//! - A dispatch is fully applied before it returns or notifies anyone.
//! - Subscribers are called exactly once per mutating dispatch, never for a
//!   no-op.
//! - Only a `false -> true` toggle produces a cross-store effect.

use crate::model::flags::UiFlags;
use crate::model::task::{Task, TaskId};
use crate::store::clock::{Clock, SystemClock};
use crate::store::flag_store::{FlagAction, FlagStore};
use crate::store::task_store::{TaskAction, TaskEffect, TaskStore, TaskSummary};
use log::debug;
use serde::Serialize;

/// External request accepted by [`Board::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddTask(String),
    ToggleTask(TaskId),
    RemoveTask(TaskId),
    ClearCompleted,
    ToggleDarkMode,
    DismissInfoBanner,
    ShowDoneNotification,
    DismissDoneNotification,
}

impl Intent {
    /// Stable snake_case label for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTask(_) => "add_task",
            Self::ToggleTask(_) => "toggle_task",
            Self::RemoveTask(_) => "remove_task",
            Self::ClearCompleted => "clear_completed",
            Self::ToggleDarkMode => "toggle_dark_mode",
            Self::DismissInfoBanner => "dismiss_info_banner",
            Self::ShowDoneNotification => "show_done_notification",
            Self::DismissDoneNotification => "dismiss_done_notification",
        }
    }
}

/// What one dispatch changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    /// Task store outcome; `NoOp` for flag-only intents.
    pub task_effect: TaskEffect,
    /// Whether any UI flag changed, including via the completion side effect.
    pub flags_changed: bool,
}

impl DispatchReport {
    fn noop() -> Self {
        Self {
            task_effect: TaskEffect::NoOp,
            flags_changed: false,
        }
    }

    /// Id allocated by an `AddTask` intent.
    pub fn created(&self) -> Option<TaskId> {
        self.task_effect.created()
    }

    /// True when a task transitioned `false -> true`.
    pub fn completion(&self) -> bool {
        self.task_effect.completed()
    }

    pub fn tasks_changed(&self) -> bool {
        !self.task_effect.is_noop()
    }

    pub fn changed(&self) -> bool {
        self.tasks_changed() || self.flags_changed
    }

    pub fn is_noop(&self) -> bool {
        !self.changed()
    }
}

/// Immutable point-in-time copy of board state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub tasks: Vec<Task>,
    pub flags: UiFlags,
}

impl BoardSnapshot {
    /// Completed tasks in collection order.
    pub fn completed_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(|task| task.done)
    }

    pub fn summary(&self) -> TaskSummary {
        TaskSummary::from_tasks(&self.tasks)
    }
}

/// Handle returned by [`Board::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&BoardSnapshot) + Send>;

/// Single owner of task and flag state.
///
/// There is no shared or global instance; callers hold a `Board` and pass it
/// by reference. `dispatch` takes `&mut self`, so listeners can never
/// re-enter it.
pub struct Board<C: Clock = SystemClock> {
    tasks: TaskStore<C>,
    flags: FlagStore,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for Board<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl Board<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Board<C> {
    /// Creates an empty board with default flags and the given time source.
    pub fn with_clock(clock: C) -> Self {
        Self {
            tasks: TaskStore::with_clock(clock),
            flags: FlagStore::new(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Applies one intent atomically across both stores.
    pub fn dispatch(&mut self, intent: Intent) -> DispatchReport {
        let label = intent.name();
        let report = match intent {
            Intent::AddTask(raw_title) => self.apply_task(TaskAction::AddTask(raw_title)),
            Intent::ToggleTask(id) => self.apply_task(TaskAction::ToggleTask(id)),
            Intent::RemoveTask(id) => self.apply_task(TaskAction::RemoveTask(id)),
            Intent::ClearCompleted => self.apply_task(TaskAction::ClearCompleted),
            Intent::ToggleDarkMode => self.apply_flag(FlagAction::ToggleDarkMode),
            Intent::DismissInfoBanner => self.apply_flag(FlagAction::DismissInfoBanner),
            Intent::ShowDoneNotification => self.apply_flag(FlagAction::ShowDoneNotification),
            Intent::DismissDoneNotification => {
                self.apply_flag(FlagAction::DismissDoneNotification)
            }
        };

        if report.is_noop() {
            debug!("event=dispatch module=board intent={label} status=noop");
            return report;
        }

        debug!(
            "event=dispatch module=board intent={label} status=applied completion={} task_count={}",
            report.completion(),
            self.tasks.len()
        );
        self.notify();
        report
    }

    /// Registers a listener called after every mutating dispatch.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&BoardSnapshot) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Tasks in display order, most recent first.
    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn flags(&self) -> UiFlags {
        self.flags.flags()
    }

    /// Derived view, recomputed on every call.
    pub fn completed_tasks(&self) -> Vec<&Task> {
        self.tasks.completed_tasks().collect()
    }

    pub fn pending_tasks(&self) -> Vec<&Task> {
        self.tasks.pending_tasks().collect()
    }

    pub fn summary(&self) -> TaskSummary {
        self.tasks.summary()
    }

    pub fn task_store(&self) -> &TaskStore<C> {
        &self.tasks
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tasks: self.tasks.tasks().to_vec(),
            flags: self.flags.flags(),
        }
    }

    fn apply_task(&mut self, action: TaskAction) -> DispatchReport {
        let task_effect = self.tasks.apply(action);
        let flags_changed =
            task_effect.completed() && self.flags.apply(FlagAction::ShowDoneNotification);
        DispatchReport {
            task_effect,
            flags_changed,
        }
    }

    fn apply_flag(&mut self, action: FlagAction) -> DispatchReport {
        DispatchReport {
            flags_changed: self.flags.apply(action),
            ..DispatchReport::noop()
        }
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
