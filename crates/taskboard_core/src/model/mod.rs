//! Domain model for the task board.
//!
//! # Responsibility
//! - Define canonical data structures used by the stores.
//! - Keep the task record and UI flags free of store logic.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Removal is a hard delete; there are no tombstones.

pub mod flags;
pub mod task;
