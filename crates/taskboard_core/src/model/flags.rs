//! Transient UI flag model.

use serde::{Deserialize, Serialize};

/// Process-lifetime presentation flags.
///
/// A fresh value always shows the info banner; dismissal is not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFlags {
    /// Dark theme selected.
    pub dark_mode: bool,
    /// Informational banner is visible. Dismissible once.
    pub show_info_banner: bool,
    /// "Task completed" banner is visible.
    pub done_notification_visible: bool,
}

impl Default for UiFlags {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_info_banner: true,
            done_notification_visible: false,
        }
    }
}
