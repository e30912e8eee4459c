use giftshelf_catalog::View;
use yew_router::prelude::*;

/// The two page resources. Switching between them is a full page load.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Page {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Gifts,
    #[at("/market.html")]
    Market,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Page {
    #[must_use]
    pub const fn for_view(view: View) -> Self {
        match view {
            View::Owned => Self::Gifts,
            View::Market => Self::Market,
        }
    }

    #[must_use]
    pub const fn view(&self) -> View {
        match self {
            Self::Market => View::Market,
            Self::Home | Self::Gifts | Self::NotFound => View::Owned,
        }
    }

    /// Absolute href of the page, including the deployment base path.
    #[must_use]
    pub fn href(&self) -> String {
        crate::paths::asset_path(&self.to_path())
    }
}

/// View of the page currently loaded in the browser.
#[must_use]
pub fn current_view() -> View {
    #[cfg(target_arch = "wasm32")]
    {
        View::from_path(&crate::dom::current_path())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        View::Owned
    }
}
