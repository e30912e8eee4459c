#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

use giftshelf_web::app::App;
use giftshelf_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        let _ = root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn next_tick() {
    gloo_timers::future::TimeoutFuture::new(50).await;
}

#[wasm_bindgen_test]
async fn app_mounts_counter_and_navigation() {
    giftshelf_web::i18n::set_lang("ru");
    Renderer::<App>::with_root(ensure_app_root()).render();
    next_tick().await;

    let doc = dom::document().expect("document");
    let stars = doc
        .get_element_by_id("stars-count")
        .expect("stars counter mounted");
    assert_eq!(
        stars.text_content().as_deref(),
        Some(giftshelf_web::catalog::STAR_BALANCE.to_string().as_str())
    );
    let stored = dom::local_storage()
        .expect("localStorage")
        .get_item(giftshelf_web::catalog::STARS_KEY)
        .expect("read stars");
    assert_eq!(
        stored,
        Some(giftshelf_web::catalog::STAR_BALANCE.to_string())
    );

    let buttons = doc.query_selector_all(".nav-btn").expect("nav buttons");
    assert_eq!(buttons.length(), 2);
    let first = buttons
        .item(0)
        .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        .expect("first nav button");
    assert_eq!(first.get_attribute("data-page").as_deref(), Some("gifts"));
}
