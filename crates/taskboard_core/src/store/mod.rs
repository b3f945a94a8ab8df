//! State containers and their reducers.
//!
//! # Responsibility
//! - Hold the task collection and UI flags as independent reducers.
//! - Report effects so the coordinator can derive cross-store transitions.
//!
//! # Invariants
//! - Reducers never fail; invalid input is absorbed as a no-op.
//! - Reducers never call each other; coupling lives in `service::board`.

pub mod clock;
pub mod flag_store;
pub mod task_store;
