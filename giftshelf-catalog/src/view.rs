use serde::{Deserialize, Serialize};

const OWNED_PAGE: &str = "index.html";
const MARKET_PAGE: &str = "market.html";

/// The two render modes, one per page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Owned,
    Market,
}

impl View {
    /// Determine the view from the current page path.
    ///
    /// Any path naming the market page is the market view; every other path (including `/`)
    /// is the owned view.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        if path.contains(MARKET_PAGE) {
            Self::Market
        } else {
            Self::Owned
        }
    }

    /// Parse the `data-page` value carried by navigation intents.
    #[must_use]
    pub fn from_data_page(value: &str) -> Option<Self> {
        match value.trim() {
            "gifts" => Some(Self::Owned),
            "market" => Some(Self::Market),
            _ => None,
        }
    }

    #[must_use]
    pub const fn data_page(self) -> &'static str {
        match self {
            Self::Owned => "gifts",
            Self::Market => "market",
        }
    }

    #[must_use]
    pub const fn page_resource(self) -> &'static str {
        match self {
            Self::Owned => OWNED_PAGE,
            Self::Market => MARKET_PAGE,
        }
    }

    #[must_use]
    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Owned => "gifts-container",
            Self::Market => "market-container",
        }
    }

    #[must_use]
    pub const fn shows_price(self) -> bool {
        matches!(self, Self::Market)
    }

    /// Only market cards play the staggered entrance animation.
    #[must_use]
    pub const fn animates_entrance(self) -> bool {
        matches!(self, Self::Market)
    }
}
