use crate::app::notice::NoticeAction;
use crate::components::{GiftGrid, LanguageSelect, NavBar, Notification, StarsCounter};
use crate::i18n;
use giftshelf_catalog::View;
use yew::prelude::*;

pub mod bootstrap;
pub mod notice;
pub mod state;

pub use state::AppState;

const fn title_key(view: View) -> &'static str {
    match view {
        View::Owned => "app.title",
        View::Market => "nav.market",
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let view = crate::router::current_view();
    let app_state = state::use_app_state(view);
    let lang = use_state(i18n::current_lang);
    #[cfg(target_arch = "wasm32")]
    bootstrap::use_bootstrap(&app_state);

    let on_hide = {
        let notices = app_state.notices.clone();
        Callback::from(move |id| notices.dispatch(NoticeAction::Hide(id)))
    };
    let on_remove = {
        let notices = app_state.notices.clone();
        Callback::from(move |id| notices.dispatch(NoticeAction::Remove(id)))
    };

    let on_lang_change = {
        let lang = lang.clone();
        Callback::from(move |code: String| lang.set(code))
    };

    // Remounted whenever the language changes.
    html! {
        <div class="app" key={(*lang).clone()}>
            <header class="app-header">
                <h1 class="app-title">{ i18n::t(title_key(view)) }</h1>
                <LanguageSelect current_lang={AttrValue::from((*lang).clone())} {on_lang_change} />
                <StarsCounter stars={*app_state.stars} />
            </header>
            <main id="main">
                <GiftGrid {view} plan={(*app_state.plan).clone()} timings={app_state.timings} />
            </main>
            <NavBar current={view} />
            <Notification
                notice={app_state.notices.current()}
                timings={app_state.timings}
                {on_hide}
                {on_remove}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn shell_renders_loading_grid_and_navigation() {
        crate::i18n::set_lang("ru");
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("id=\"gifts-container\""), "{html}");
        assert!(html.contains("id=\"stars-count\""), "{html}");
        assert!(html.contains("nav-btn"), "{html}");
        assert!(!html.contains("class=\"notification"), "{html}");
    }

    #[test]
    fn counter_shows_balance_before_bootstrap_runs() {
        crate::i18n::set_lang("ru");
        let html = block_on(LocalServerRenderer::<App>::new().render());
        let expected = format!("id=\"stars-count\">{}", giftshelf_catalog::STAR_BALANCE);
        assert!(html.contains(&expected), "{html}");
    }

    #[test]
    fn titles_follow_view() {
        assert_eq!(title_key(View::Owned), "app.title");
        assert_eq!(title_key(View::Market), "nav.market");
    }
}
