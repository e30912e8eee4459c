use giftshelf_catalog::{Notice, NoticeSlot};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer-backed notification slot.
///
/// Dismissal timers dispatch against the latest state, so a late step for a replaced notice
/// is a no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeState {
    slot: NoticeSlot,
}

pub enum NoticeAction {
    Show { message: String, success: bool },
    Hide(u64),
    Remove(u64),
}

impl NoticeState {
    #[must_use]
    pub fn current(&self) -> Option<Notice> {
        self.slot.current().cloned()
    }
}

impl Reducible for NoticeState {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            NoticeAction::Show { message, success } => {
                next.slot.show(message, success);
                true
            }
            NoticeAction::Hide(id) => next.slot.begin_dismiss(id),
            NoticeAction::Remove(id) => next.slot.remove(id),
        };
        if changed { Rc::new(next) } else { self }
    }
}
