use crate::app::notice::{NoticeAction, NoticeState};
use giftshelf_catalog::{RenderPlan, STAR_BALANCE, Timings, View};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub view: View,
    pub timings: Timings,
    /// `None` until the catalog load settles.
    pub plan: UseStateHandle<Option<RenderPlan>>,
    pub stars: UseStateHandle<u32>,
    pub notices: UseReducerHandle<NoticeState>,
}

#[hook]
pub fn use_app_state(view: View) -> AppState {
    AppState {
        view,
        timings: Timings::standard(),
        plan: use_state(|| None::<RenderPlan>),
        stars: use_state(|| STAR_BALANCE),
        notices: use_reducer(NoticeState::default),
    }
}

impl AppState {
    /// Show a transient message, replacing any notice already on screen.
    pub fn notify(&self, message: impl Into<String>, is_success: bool) {
        self.notices.dispatch(NoticeAction::Show {
            message: message.into(),
            success: is_success,
        });
    }

    /// Replace the container contents with the generic empty state.
    pub fn force_empty(&self) {
        self.plan.set(Some(RenderPlan::failed()));
    }
}
