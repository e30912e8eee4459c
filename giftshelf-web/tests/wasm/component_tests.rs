#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, MouseEvent, MouseEventInit};
use yew::prelude::*;
use yew::Renderer;

use giftshelf_web::app::notice::{NoticeAction, NoticeState};
use giftshelf_web::catalog::{AnimationFlag, CardPlan, GiftItem, Timings, View};
use giftshelf_web::components::{GiftCard, NavBar, Notification, gift_card, nav_bar};
use giftshelf_web::dom;
use giftshelf_web::storage::BrowserStore;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn fresh_root(id: &str) -> Element {
    let doc = dom::document().expect("document");
    if let Some(old) = doc.get_element_by_id(id) {
        old.remove();
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).expect("valid selector")
}

fn has_class(root: &Element, selector: &str, class: &str) -> bool {
    find(root, selector).is_some_and(|el| el.class_list().contains(class))
}

async fn wait(ms: u32) {
    TimeoutFuture::new(ms).await;
}

fn pointer_enter(el: &Element) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    let event =
        MouseEvent::new_with_mouse_event_init_dict("mouseenter", &init).expect("mouse event");
    el.dispatch_event(&event).expect("dispatch mouseenter");
}

fn click(root: &Element, selector: &str) {
    find(root, selector)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect("clickable element")
        .click();
}

#[wasm_bindgen_test]
async fn market_button_rearms_flag_and_routes_to_market_page() {
    let root = fresh_root("nav-root");
    let visited = Rc::new(RefCell::new(Vec::<String>::new()));
    let on_navigate = {
        let visited = Rc::clone(&visited);
        Callback::from(move |href: String| visited.borrow_mut().push(href))
    };
    let app = Renderer::<NavBar>::with_root_and_props(
        root.clone(),
        nav_bar::Props {
            current: View::Owned,
            on_navigate: Some(on_navigate),
        },
    )
    .render();
    wait(20).await;

    let flag = AnimationFlag::new(BrowserStore::Session);
    flag.mark_played().expect("mark flag");

    click(&root, ".nav-btn[data-page=\"gifts\"]");
    assert!(flag.is_set().expect("read flag"), "owned intent keeps the flag");
    assert!(visited.borrow().is_empty(), "already on the owned page");

    click(&root, ".nav-btn[data-page=\"market\"]");
    assert!(!flag.is_set().expect("read flag"));
    assert_eq!(*visited.borrow(), vec![String::from("/market.html")]);
    app.destroy();
}

#[wasm_bindgen_test]
async fn delayed_card_enters_after_its_delay() {
    let root = fresh_root("entry-root");
    let app = Renderer::<GiftCard>::with_root_and_props(
        root.clone(),
        gift_card::Props {
            card: CardPlan {
                item: GiftItem::named("Rocket").with_price(5.0),
                show_price: true,
                entrance_delay_ms: Some(100),
            },
            timings: Timings::standard(),
        },
    )
    .render();

    wait(30).await;
    assert!(find(&root, ".gift-card").is_some());
    assert!(!has_class(&root, ".gift-card", "market-entry"));
    wait(150).await;
    assert!(has_class(&root, ".gift-card", "market-entry"));
    app.destroy();
}

#[wasm_bindgen_test]
async fn hover_pulses_once_and_restarts_looping_image_every_time() {
    let root = fresh_root("hover-root");
    let app = Renderer::<GiftCard>::with_root_and_props(
        root.clone(),
        gift_card::Props {
            card: CardPlan {
                item: GiftItem::named("Cake").with_image("img/cake.gif"),
                show_price: false,
                entrance_delay_ms: None,
            },
            timings: Timings::standard(),
        },
    )
    .render();
    wait(20).await;
    let card = find(&root, ".gift-card").expect("card mounted");
    let src = || {
        find(&root, "img.gift-image")
            .and_then(|img| img.get_attribute("src"))
            .unwrap_or_default()
    };

    pointer_enter(&card);
    assert_eq!(src(), "", "looping image is cleared on hover");
    wait(20).await;
    assert!(has_class(&root, ".gift-card", "hover-animation"));
    wait(60).await;
    assert_eq!(src(), "img/cake.gif", "source restored after the restart delay");
    wait(600).await;
    assert!(!has_class(&root, ".gift-card", "hover-animation"));

    pointer_enter(&card);
    assert_eq!(src(), "");
    wait(20).await;
    assert!(!has_class(&root, ".gift-card", "hover-animation"), "pulse is one-shot");
    wait(60).await;
    assert_eq!(src(), "img/cake.gif");
    app.destroy();
}

#[function_component(NoticeHost)]
fn notice_host() -> Html {
    let notices = use_reducer(NoticeState::default);
    {
        let notices = notices.clone();
        use_effect_with((), move |()| {
            notices.dispatch(NoticeAction::Show {
                message: String::from("Ошибка загрузки: offline"),
                success: false,
            });
        });
    }
    let on_hide = {
        let notices = notices.clone();
        Callback::from(move |id| notices.dispatch(NoticeAction::Hide(id)))
    };
    let on_remove = {
        let notices = notices.clone();
        Callback::from(move |id| notices.dispatch(NoticeAction::Remove(id)))
    };
    html! {
        <Notification
            notice={notices.current()}
            timings={Timings::standard()}
            {on_hide}
            {on_remove}
        />
    }
}

#[wasm_bindgen_test]
async fn notification_fades_after_five_seconds_then_leaves() {
    let root = fresh_root("notice-root");
    let app = Renderer::<NoticeHost>::with_root(root.clone()).render();

    wait(100).await;
    let notice = find(&root, ".notification").expect("notice shown");
    assert!(notice.get_attribute("style").is_none());
    assert!(notice.text_content().unwrap_or_default().contains("offline"));

    wait(4_800).await;
    let notice = find(&root, ".notification").expect("still visible before 5000 ms");
    assert!(notice.get_attribute("style").is_none());

    wait(200).await;
    let style = find(&root, ".notification")
        .and_then(|el| el.get_attribute("style"))
        .expect("fading notice keeps its node");
    assert!(style.contains("opacity: 0"), "{style}");

    wait(400).await;
    assert!(find(&root, ".notification").is_none());
    app.destroy();
}
