//! UI flag reducer.
//!
//! # Responsibility
//! - Own theme and banner visibility flags.
//! - Apply `FlagAction`s as pure flag sets.
//!
//! # Invariants
//! - `show_info_banner` only ever goes from `true` to `false`.
//! - `done_notification_visible` never clears on its own; only dismissal does.

use crate::model::flags::UiFlags;

/// Mutations accepted by [`FlagStore::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagAction {
    ToggleDarkMode,
    DismissInfoBanner,
    ShowDoneNotification,
    DismissDoneNotification,
}

/// Owner of transient presentation flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagStore {
    flags: UiFlags,
}

impl FlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one action; returns whether any flag changed.
    pub fn apply(&mut self, action: FlagAction) -> bool {
        let before = self.flags;
        match action {
            FlagAction::ToggleDarkMode => self.flags.dark_mode = !self.flags.dark_mode,
            FlagAction::DismissInfoBanner => self.flags.show_info_banner = false,
            FlagAction::ShowDoneNotification => self.flags.done_notification_visible = true,
            FlagAction::DismissDoneNotification => self.flags.done_notification_visible = false,
        }
        self.flags != before
    }

    /// Current flags by value.
    pub fn flags(&self) -> UiFlags {
        self.flags
    }
}
