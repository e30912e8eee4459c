//! Single-slot transient notification state.
//!
//! Each notice gets a fresh id; dismissal steps name the id they were scheduled for, so a step
//! arriving after the notice was replaced changes nothing.

use serde::{Deserialize, Serialize};

/// Prefix of the message shown when the catalog fails to load.
pub const LOAD_ERROR_PREFIX: &str = "Ошибка загрузки";

/// Build the load-failure message from an error's text.
#[must_use]
pub fn load_error_message(detail: &str) -> String {
    format!("{LOAD_ERROR_PREFIX}: {detail}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Error,
    Success,
}

impl NoticeKind {
    #[must_use]
    pub const fn from_success(is_success: bool) -> Self {
        if is_success { Self::Success } else { Self::Error }
    }

    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Error => "fa-exclamation-circle",
            Self::Success => "fa-check-circle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeStage {
    Visible,
    /// Faded out and translated, waiting to be removed.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
    pub stage: NoticeStage,
}

/// Holds at most one notice at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeSlot {
    /// Replace whatever is showing with a new notice and return its id.
    pub fn show(&mut self, message: impl Into<String>, is_success: bool) -> u64 {
        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.current = Some(Notice {
            id,
            message: message.into(),
            kind: NoticeKind::from_success(is_success),
            stage: NoticeStage::Visible,
        });
        id
    }

    /// Start hiding notice `id`. Returns `false` if it is no longer showing.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.current.as_mut() {
            Some(notice) if notice.id == id && notice.stage == NoticeStage::Visible => {
                notice.stage = NoticeStage::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Drop notice `id`. Returns `false` if it was already replaced or removed.
    pub fn remove(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|notice| notice.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub const fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_notice_replaces_previous_immediately() {
        let mut slot = NoticeSlot::default();
        let first = slot.show("first", false);
        let second = slot.show("second", true);
        assert_ne!(first, second);
        let current = slot.current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.kind, NoticeKind::Success);
    }

    #[test]
    fn stale_dismissal_does_not_touch_successor() {
        let mut slot = NoticeSlot::default();
        let first = slot.show("first", false);
        let second = slot.show("second", false);
        assert!(!slot.begin_dismiss(first));
        assert!(!slot.remove(first));
        assert_eq!(slot.current().map(|n| n.id), Some(second));
        assert_eq!(slot.current().map(|n| n.stage), Some(NoticeStage::Visible));
    }

    #[test]
    fn dismissal_runs_visible_leaving_removed() {
        let mut slot = NoticeSlot::default();
        let id = slot.show("bye", false);
        assert!(slot.begin_dismiss(id));
        assert!(!slot.begin_dismiss(id));
        assert_eq!(slot.current().map(|n| n.stage), Some(NoticeStage::Leaving));
        assert!(slot.remove(id));
        assert!(slot.current().is_none());
    }

    #[test]
    fn load_error_message_carries_prefix() {
        let msg = load_error_message("HTTP error! status: 500");
        assert!(msg.starts_with("Ошибка загрузки"));
        assert!(msg.ends_with("status: 500"));
        assert_eq!(NoticeKind::Error.icon_class(), "fa-exclamation-circle");
    }
}
