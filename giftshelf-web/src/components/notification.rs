use giftshelf_catalog::{Notice, NoticeKind, NoticeStage, Timings};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// Inline style applied while a notice fades out.
pub const LEAVING_STYLE: &str = "opacity: 0; transform: translateX(-50%) translateY(-20px)";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub notice: Option<Notice>,
    #[prop_or_default]
    pub timings: Timings,
    /// Fired with the notice id once it has been visible long enough.
    pub on_hide: Callback<u64>,
    /// Fired with the notice id once the fade has finished.
    pub on_remove: Callback<u64>,
}

#[function_component(Notification)]
pub fn notification(p: &Props) -> Html {
    {
        let step = p.notice.as_ref().map(|notice| (notice.id, notice.stage));
        let timings = p.timings;
        let on_hide = p.on_hide.clone();
        let on_remove = p.on_remove.clone();
        use_effect_with(step, move |step| {
            let pending = step.map(|(id, stage)| match stage {
                NoticeStage::Visible => {
                    Timeout::new(timings.notice_visible_ms, move || on_hide.emit(id))
                }
                NoticeStage::Leaving => {
                    Timeout::new(timings.notice_fade_ms, move || on_remove.emit(id))
                }
            });
            move || drop(pending)
        });
    }

    let Some(notice) = p.notice.as_ref() else {
        return Html::default();
    };

    let class = classes!(
        "notification",
        (notice.kind == NoticeKind::Success).then_some("success")
    );
    let style = (notice.stage == NoticeStage::Leaving).then_some(LEAVING_STYLE);

    html! {
        <div {class} {style} role="status" aria-live="polite">
            <i class={classes!("fas", notice.kind.icon_class())} aria-hidden="true"></i>
            <span>{ notice.message.clone() }</span>
        </div>
    }
}
