use giftshelf_catalog::EmptyState as EmptyKind;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or(AttrValue::Static(EmptyKind::NoGifts.default_text()))]
    pub text: AttrValue,
}

/// Placeholder shown in place of cards.
#[function_component(EmptyState)]
pub fn empty_state(p: &Props) -> Html {
    html! {
        <div class="empty-state">
            <div class="empty-state-text">{ p.text.clone() }</div>
        </div>
    }
}
