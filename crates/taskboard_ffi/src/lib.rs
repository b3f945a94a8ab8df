//! Flutter bridge crate for the task board core.

pub mod api;
