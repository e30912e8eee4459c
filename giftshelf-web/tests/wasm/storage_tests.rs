#![cfg(target_arch = "wasm32")]

use giftshelf_web::catalog::{ANIMATION_FLAG_KEY, AnimationFlag, KeyValueStore, NavOutcome, View};
use giftshelf_web::catalog::follow_intent;
use giftshelf_web::storage::BrowserStore;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_flag_round_trips_through_session_storage() {
    let flag = AnimationFlag::new(BrowserStore::Session);
    flag.rearm().expect("clear flag");
    assert!(!flag.snapshot_and_mark().expect("snapshot"));
    assert_eq!(
        BrowserStore::Session
            .get(ANIMATION_FLAG_KEY)
            .expect("read flag")
            .as_deref(),
        Some("true")
    );
    assert!(flag.snapshot_and_mark().expect("snapshot"));
}

#[wasm_bindgen_test]
fn market_intent_rearms_flag() {
    let flag = AnimationFlag::new(BrowserStore::Session);
    flag.mark_played().expect("mark");
    let outcome = follow_intent(View::Market, View::Market, &flag).expect("intent");
    assert_eq!(outcome, NavOutcome::Stay);
    assert!(!flag.is_set().expect("read flag"));
}

#[wasm_bindgen_test]
fn local_store_keeps_values() {
    let store = BrowserStore::Local;
    store.set("giftshelf.test", "1").expect("write");
    assert_eq!(store.get("giftshelf.test").expect("read").as_deref(), Some("1"));
    store.remove("giftshelf.test").expect("remove");
    assert_eq!(store.get("giftshelf.test").expect("read"), None);
}
