use crate::i18n;
use giftshelf_catalog::{CardPlan, HoverLatch, ImageErrorHook, Timings};
use gloo_timers::callback::Timeout;
use std::collections::BTreeMap;
use web_sys::HtmlImageElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub card: CardPlan,
    #[prop_or_default]
    pub timings: Timings,
}

/// Clear the image source and restore it after `delay_ms`, restarting the animation.
///
/// The pending restore is parked in `slot`; replacing or dropping it cancels the restore.
fn restart_loop(img_ref: &NodeRef, src: &str, delay_ms: u32, slot: &mut Option<Timeout>) {
    let Some(img) = img_ref.cast::<HtmlImageElement>() else {
        return;
    };
    img.set_src("");
    let img_ref = img_ref.clone();
    let src = src.to_string();
    *slot = Some(Timeout::new(delay_ms, move || {
        if let Some(img) = img_ref.cast::<HtmlImageElement>() {
            img.set_src(&src);
        }
    }));
}

fn price_block(price: f64) -> Html {
    let formatted = i18n::fmt_number(price);
    let mut vars = BTreeMap::new();
    vars.insert("price", formatted.as_str());
    html! {
        <div class="gift-price" aria-label={i18n::tr("card.price", Some(&vars))}>
            <i class="fas fa-star" aria-hidden="true"></i>
            <span class="gift-price-value">{ formatted.clone() }</span>
        </div>
    }
}

/// A single gift card.
///
/// Market cards with an entrance delay gain `market-entry` once the delay elapses. The first
/// pointer-enter pulses the card; every pointer-enter restarts a looping image.
#[function_component(GiftCard)]
pub fn gift_card(p: &Props) -> Html {
    let item = &p.card.item;
    let looping = item.has_looping_image();

    let entered = use_state(|| false);
    let pulsing = use_state(|| false);
    let image_hook = use_state(ImageErrorHook::default);
    let latch = use_mut_ref(HoverLatch::default);
    let pulse_timer = use_mut_ref(|| None::<Timeout>);
    let restart_timer = use_mut_ref(|| None::<Timeout>);
    let img_ref = use_node_ref();

    {
        let entered = entered.clone();
        use_effect_with(p.card.entrance_delay_ms, move |delay| {
            let pending = delay.map(|ms| Timeout::new(ms, move || entered.set(true)));
            move || drop(pending)
        });
    }

    let onmouseenter = {
        let pulsing = pulsing.clone();
        let img_ref = img_ref.clone();
        let src = item.image.clone().unwrap_or_default();
        let timings = p.timings;
        Callback::from(move |_: MouseEvent| {
            let effects = latch.borrow_mut().enter(looping);
            if effects.pulse {
                pulsing.set(true);
                let pulsing = pulsing.clone();
                *pulse_timer.borrow_mut() = Some(Timeout::new(timings.hover_pulse_ms, move || {
                    pulsing.set(false);
                }));
            }
            if effects.restart_loop {
                restart_loop(
                    &img_ref,
                    &src,
                    timings.loop_restart_ms,
                    &mut restart_timer.borrow_mut(),
                );
            }
        })
    };

    let onerror = image_hook.is_attached().then(|| {
        let image_hook = image_hook.clone();
        Callback::from(move |_: Event| {
            let mut hook = *image_hook;
            hook.on_error();
            log::debug!("Gift image failed to load; error handler detached");
            image_hook.set(hook);
        })
    });

    let image = item.image.as_deref().map_or_else(Html::default, |src| {
        html! {
            <div class="gift-image-wrap">
                <img
                    ref={img_ref.clone()}
                    class={classes!("gift-image", looping.then_some("gif-image"))}
                    src={src.to_string()}
                    alt={item.name.clone()}
                    loading="lazy"
                    {onerror}
                />
            </div>
        }
    });

    let number = item.number.as_deref().map_or_else(Html::default, |number| {
        let mut vars = BTreeMap::new();
        vars.insert("number", number);
        html! { <div class="gift-number">{ i18n::tr("card.number", Some(&vars)) }</div> }
    });

    let price = item
        .price
        .filter(|_| p.card.show_price)
        .map_or_else(Html::default, price_block);

    let class = classes!(
        "gift-card",
        (*entered).then_some("market-entry"),
        (*pulsing).then_some("hover-animation")
    );

    html! {
        <div {class} {onmouseenter}>
            { image }
            <div class="gift-info">
                <div class="gift-name">{ item.name.clone() }</div>
                { number }
                { price }
            </div>
        </div>
    }
}
