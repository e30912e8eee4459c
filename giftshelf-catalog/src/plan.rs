//! Render planning: turns a catalog and view into the exact set of nodes to mount.
//!
//! The plan is pure data so the UI layer only has to mount it; partitioning and stagger
//! scheduling are tested here without a DOM.

use crate::catalog::Catalog;
use crate::item::GiftItem;
use crate::timings::Timings;
use crate::view::View;
use serde::{Deserialize, Serialize};

/// Which placeholder to show when there are no cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// Generic placeholder: owned view, and every load failure.
    NoGifts,
    /// Market view with nothing for sale.
    NoneAvailable,
}

impl EmptyState {
    #[must_use]
    pub const fn for_view(view: View) -> Self {
        match view {
            View::Owned => Self::NoGifts,
            View::Market => Self::NoneAvailable,
        }
    }

    /// Localization key for the placeholder text.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::NoGifts => "empty.owned",
            Self::NoneAvailable => "empty.market",
        }
    }

    /// Built-in copy, used where no localization bundle is available.
    #[must_use]
    pub const fn default_text(self) -> &'static str {
        match self {
            Self::NoGifts => "У вас нет подарков",
            Self::NoneAvailable => "Нет доступных подарков",
        }
    }
}

/// One card to mount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPlan {
    pub item: GiftItem,
    pub show_price: bool,
    /// `None` renders the card settled; `Some(ms)` applies the entrance class after `ms`.
    pub entrance_delay_ms: Option<u32>,
}

/// What a container should display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum RenderPlan {
    Empty(EmptyState),
    Cards(Vec<CardPlan>),
}

impl RenderPlan {
    /// Plan the container contents for `view`.
    ///
    /// `animations_played` is the session flag as it stood when the page loaded.
    #[must_use]
    pub fn for_catalog(
        catalog: &Catalog,
        view: View,
        animations_played: bool,
        timings: &Timings,
    ) -> Self {
        let items = catalog.partition(view);
        if items.is_empty() {
            return Self::Empty(EmptyState::for_view(view));
        }

        let animate = view.animates_entrance() && !animations_played;
        let delays = entrance_delays(items.len(), animate, timings.stagger_ms);
        Self::Cards(
            items
                .into_iter()
                .zip(delays)
                .map(|(item, entrance_delay_ms)| CardPlan {
                    item: item.clone(),
                    show_price: view.shows_price(),
                    entrance_delay_ms,
                })
                .collect(),
        )
    }

    /// The forced empty state shown after any load failure, whatever the view.
    #[must_use]
    pub const fn failed() -> Self {
        Self::Empty(EmptyState::NoGifts)
    }

    #[must_use]
    pub fn cards(&self) -> &[CardPlan] {
        match self {
            Self::Cards(cards) => cards,
            Self::Empty(_) => &[],
        }
    }

    #[must_use]
    pub const fn empty_state(&self) -> Option<EmptyState> {
        match self {
            Self::Empty(state) => Some(*state),
            Self::Cards(_) => None,
        }
    }
}

/// Entrance delays for `count` cards: `i * stagger_ms` when animating, `None` otherwise.
#[must_use]
pub fn entrance_delays(count: usize, animate: bool, stagger_ms: u32) -> Vec<Option<u32>> {
    (0..count)
        .map(|index| {
            animate.then(|| {
                u32::try_from(index)
                    .unwrap_or(u32::MAX)
                    .saturating_mul(stagger_ms)
            })
        })
        .collect()
}
