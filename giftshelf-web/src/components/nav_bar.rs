use crate::i18n;
use crate::router::Page;
use giftshelf_catalog::{NavOutcome, View};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// View of the page currently loaded.
    pub current: View,
    /// Receives the target href instead of loading the page when set.
    #[prop_or_default]
    pub on_navigate: Option<Callback<String>>,
}

/// Clear the entrance flag for market intents, then decide where to go.
#[cfg(target_arch = "wasm32")]
fn rearm_and_resolve(target: View, current: View) -> NavOutcome {
    use crate::storage::BrowserStore;
    use giftshelf_catalog::{AnimationFlag, follow_intent, resolve_target};

    let flag = AnimationFlag::new(BrowserStore::Session);
    follow_intent(target, current, &flag).unwrap_or_else(|err| {
        log::warn!("Could not re-arm entrance animation: {err}");
        resolve_target(target, current)
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn rearm_and_resolve(target: View, current: View) -> NavOutcome {
    log::debug!("Session storage unavailable; routing {target:?} from {current:?} only");
    giftshelf_catalog::resolve_target(target, current)
}

#[cfg(target_arch = "wasm32")]
fn open_page(href: &str) {
    if let Err(err) = crate::dom::navigate_to(href) {
        crate::dom::console_error(&crate::dom::js_error_message(&err));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_page(href: &str) {
    log::debug!("Navigation to {href} ignored outside the browser");
}

/// Handle a click on a navigation intent targeting `target`.
fn follow(target: View, current: View, on_navigate: Option<&Callback<String>>) {
    let NavOutcome::Navigate(view) = rearm_and_resolve(target, current) else {
        return;
    };
    let href = Page::for_view(view).href();
    match on_navigate {
        Some(callback) => callback.emit(href),
        None => open_page(&href),
    }
}

fn nav_button(target: View, current: View, on_navigate: Option<&Callback<String>>) -> Html {
    let on_navigate = on_navigate.cloned();
    let onclick = Callback::from(move |_: MouseEvent| follow(target, current, on_navigate.as_ref()));
    let (label, icon) = match target {
        View::Owned => (i18n::t("nav.gifts"), "fa-gift"),
        View::Market => (i18n::t("nav.market"), "fa-store"),
    };
    html! {
        <button
            class={classes!("nav-btn", (target == current).then_some("active"))}
            data-page={target.data_page()}
            {onclick}
        >
            <i class={classes!("fas", icon)} aria-hidden="true"></i>
            <span>{ label }</span>
        </button>
    }
}

/// Bottom navigation between the owned and market pages.
#[function_component(NavBar)]
pub fn nav_bar(p: &Props) -> Html {
    html! {
        <nav class="bottom-nav" aria-label={i18n::t("nav.label")}>
            { nav_button(View::Owned, p.current, p.on_navigate.as_ref()) }
            { nav_button(View::Market, p.current, p.on_navigate.as_ref()) }
        </nav>
    }
}
