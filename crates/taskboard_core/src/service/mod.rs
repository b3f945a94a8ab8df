//! Core use-case services.
//!
//! # Responsibility
//! - Compose the stores behind one dispatch entry point.
//! - Keep UI/FFI layers decoupled from reducer details.

pub mod board;
