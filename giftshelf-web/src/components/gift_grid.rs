use crate::components::{EmptyState, GiftCard};
use crate::i18n;
use giftshelf_catalog::{EmptyState as EmptyKind, RenderPlan, Timings, View};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: View,
    /// `None` while the catalog is still loading.
    #[prop_or_default]
    pub plan: Option<RenderPlan>,
    #[prop_or_default]
    pub timings: Timings,
}

#[must_use]
pub fn empty_text(state: EmptyKind) -> String {
    let text = i18n::t(state.i18n_key());
    if text == state.i18n_key() {
        state.default_text().to_string()
    } else {
        text
    }
}

/// Container for the active view: cards, an empty state, or a loading line.
#[function_component(GiftGrid)]
pub fn gift_grid(p: &Props) -> Html {
    let body = match &p.plan {
        None => html! { <div class="catalog-loading" aria-busy="true">{ i18n::t("catalog.loading") }</div> },
        Some(RenderPlan::Empty(state)) => html! { <EmptyState text={empty_text(*state)} /> },
        Some(RenderPlan::Cards(cards)) => cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                html! { <GiftCard key={index} card={card.clone()} timings={p.timings} /> }
            })
            .collect::<Html>(),
    };

    html! {
        <div id={p.view.container_id()} class="gifts-grid" aria-live="polite">
            { body }
        </div>
    }
}
