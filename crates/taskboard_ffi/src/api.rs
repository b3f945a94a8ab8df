//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose board intents and snapshot reads to Dart via FRB.
//! - Serialize dispatch from multiple isolates through one handle lock.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Malformed task ids are absorbed as no-ops, mirroring unknown ids in core.
//! - Every mutating call returns the post-dispatch snapshot.

use log::warn;
use std::sync::{Mutex, MutexGuard, PoisonError};
use taskboard_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Board, BoardSnapshot, DispatchReport, Intent, Task, TaskId, UiFlags,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row as rendered by the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    /// Stable task ID in string form.
    pub id: String,
    pub title: String,
    pub done: bool,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// UI flags mirrored for Dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardFlags {
    pub dark_mode: bool,
    pub show_info_banner: bool,
    pub done_notification_visible: bool,
}

/// Read-only board view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshotView {
    /// Most recently created first.
    pub tasks: Vec<TaskItem>,
    pub completed_count: u32,
    pub pending_count: u32,
    pub flags: BoardFlags,
}

/// Action response envelope for every board intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the call was accepted. Always true; no-ops are not failures.
    pub ok: bool,
    /// Whether the dispatch changed any state.
    pub changed: bool,
    /// Task created by `add_task`, when one was created.
    pub task_id: Option<String>,
    /// Human-readable message for diagnostics.
    pub message: String,
    /// State after the dispatch.
    pub snapshot: BoardSnapshotView,
}

/// Opaque owner of one board instance.
///
/// Dart keeps the handle alive for the session; dropping it discards state.
#[flutter_rust_bridge::frb(opaque)]
pub struct BoardHandle {
    board: Mutex<Board>,
}

impl BoardHandle {
    /// Creates an empty board with default flags.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        Self {
            board: Mutex::new(Board::new()),
        }
    }

    /// Adds a task; blank titles are accepted as no-ops.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_task(&self, title: String) -> BoardActionResponse {
        self.dispatch(Intent::AddTask(title))
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_task(&self, task_id: String) -> BoardActionResponse {
        self.dispatch_for_id(&task_id, Intent::ToggleTask)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn remove_task(&self, task_id: String) -> BoardActionResponse {
        self.dispatch_for_id(&task_id, Intent::RemoveTask)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn clear_completed(&self) -> BoardActionResponse {
        self.dispatch(Intent::ClearCompleted)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn toggle_dark_mode(&self) -> BoardActionResponse {
        self.dispatch(Intent::ToggleDarkMode)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn dismiss_info_banner(&self) -> BoardActionResponse {
        self.dispatch(Intent::DismissInfoBanner)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn show_done_notification(&self) -> BoardActionResponse {
        self.dispatch(Intent::ShowDoneNotification)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn dismiss_done_notification(&self) -> BoardActionResponse {
        self.dispatch(Intent::DismissDoneNotification)
    }

    /// Current state without dispatching anything.
    #[flutter_rust_bridge::frb(sync)]
    pub fn snapshot(&self) -> BoardSnapshotView {
        to_snapshot_view(&self.lock().snapshot())
    }

    fn dispatch(&self, intent: Intent) -> BoardActionResponse {
        let label = intent.name();
        let mut board = self.lock();
        let report = board.dispatch(intent);
        let snapshot = to_snapshot_view(&board.snapshot());
        drop(board);
        to_response(label, report, snapshot)
    }

    fn dispatch_for_id(
        &self,
        raw_id: &str,
        intent: impl FnOnce(TaskId) -> Intent,
    ) -> BoardActionResponse {
        match parse_task_id(raw_id) {
            Some(id) => self.dispatch(intent(id)),
            None => {
                warn!("event=ffi_dispatch module=ffi status=noop reason=malformed_task_id");
                BoardActionResponse {
                    ok: true,
                    changed: false,
                    task_id: None,
                    message: format!("No change: `{}` is not a task id.", raw_id.trim()),
                    snapshot: self.snapshot(),
                }
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        // Board state is consistent after every dispatch, so a poisoned lock
        // still guards valid data.
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BoardHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_task_id(raw: &str) -> Option<TaskId> {
    TaskId::parse_str(raw.trim()).ok()
}

fn to_response(
    label: &str,
    report: DispatchReport,
    snapshot: BoardSnapshotView,
) -> BoardActionResponse {
    let message = if report.completion() {
        "Task completed.".to_string()
    } else if report.changed() {
        format!("{label} applied.")
    } else {
        format!("No change: {label}.")
    };
    BoardActionResponse {
        ok: true,
        changed: report.changed(),
        task_id: report.created().map(|id| id.to_string()),
        message,
        snapshot,
    }
}

fn to_snapshot_view(snapshot: &BoardSnapshot) -> BoardSnapshotView {
    let summary = snapshot.summary();
    BoardSnapshotView {
        tasks: snapshot.tasks.iter().map(to_task_item).collect(),
        completed_count: saturating_u32(summary.completed),
        pending_count: saturating_u32(summary.pending),
        flags: to_board_flags(snapshot.flags),
    }
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        title: task.title.clone(),
        done: task.done,
        created_at: task.created_at,
    }
}

fn to_board_flags(flags: UiFlags) -> BoardFlags {
    BoardFlags {
        dark_mode: flags.dark_mode,
        show_info_banner: flags.show_info_banner,
        done_notification_visible: flags.done_notification_visible,
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
