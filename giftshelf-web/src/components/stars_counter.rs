use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Copy)]
pub struct Props {
    pub stars: u32,
}

#[function_component(StarsCounter)]
pub fn stars_counter(p: &Props) -> Html {
    html! {
        <div class="stars-counter" aria-label={i18n::t("stars.label")}>
            <i class="fas fa-star" aria-hidden="true"></i>
            <span id="stars-count">{ p.stars.to_string() }</span>
        </div>
    }
}
