#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use giftshelf_catalog::{AnimationFlag, KeyValueStore, LoadOutcome, STAR_BALANCE, View};
#[cfg(any(target_arch = "wasm32", test))]
use giftshelf_catalog::persist_star_balance;
#[cfg(any(target_arch = "wasm32", test))]
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Re-assert the star balance in durable storage. The display value survives a storage failure.
#[cfg(any(target_arch = "wasm32", test))]
fn star_balance<S: KeyValueStore>(store: &S) -> u32 {
    persist_star_balance(store).unwrap_or_else(|err| {
        log::warn!("Could not persist star balance: {err}");
        STAR_BALANCE
    })
}

/// Whether the market entrance animation already played this session.
///
/// The flag is read before being set for the current load; owned pages leave it alone.
#[cfg(any(target_arch = "wasm32", test))]
fn take_animation_snapshot<S: KeyValueStore>(view: View, store: S) -> bool {
    if !view.animates_entrance() {
        return false;
    }
    AnimationFlag::new(store)
        .snapshot_and_mark()
        .unwrap_or_else(|err| {
            log::warn!("Animation flag unavailable, animating entrance: {err}");
            false
        })
}

/// Hand a settled load to the UI: failures are logged and announced before the forced
/// empty plan is shown.
#[cfg(any(target_arch = "wasm32", test))]
fn apply_outcome(app_state: &AppState, outcome: LoadOutcome) {
    match &outcome.failure {
        Some(err) => {
            let detail = err.to_string();
            let mut vars = BTreeMap::new();
            vars.insert("message", detail.as_str());
            let message = crate::i18n::tr("notify.load_error", Some(&vars));
            log::error!("Catalog load failed ({:?}): {detail}", err.kind());
            #[cfg(target_arch = "wasm32")]
            crate::dom::console_error(&message);
            app_state.notify(message, false);
            app_state.force_empty();
        }
        None => {
            log::info!(
                "Catalog ready for {:?}: {} card(s)",
                outcome.view,
                outcome.plan.cards().len()
            );
            app_state.plan.set(Some(outcome.plan));
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    use crate::loader::HttpCatalogSource;
    use crate::storage::BrowserStore;

    let app_state = app_state.clone();
    use_effect_with((), move |()| {
        app_state.stars.set(star_balance(&BrowserStore::Local));
        let played = take_animation_snapshot(app_state.view, BrowserStore::Session);
        wasm_bindgen_futures::spawn_local(async move {
            let source = HttpCatalogSource::from_config();
            let outcome =
                giftshelf_catalog::load_catalog(&source, app_state.view, played, &app_state.timings)
                    .await;
            apply_outcome(&app_state, outcome);
        });
        || {}
    });
}
