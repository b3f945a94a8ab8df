//! Core state logic for the task board.
//! This crate is the single source of truth for task and UI flag invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::flags::UiFlags;
pub use model::task::{normalize_title, Task, TaskId, TaskValidationError};
pub use service::board::{Board, BoardSnapshot, DispatchReport, Intent, SubscriptionId};
pub use store::clock::{Clock, FixedClock, SystemClock};
pub use store::flag_store::{FlagAction, FlagStore};
pub use store::task_store::{InvariantViolation, TaskAction, TaskEffect, TaskStore, TaskSummary};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
