//! Giftshelf Catalog
//!
//! Platform-agnostic core for the Giftshelf client: the gift item model, catalog parsing,
//! owned/market partitioning, render planning and the small amount of persisted state
//! (entrance animation flag, star balance). Browser and CLI front ends plug in through the
//! [`CatalogSource`] and [`KeyValueStore`] traits.

pub mod catalog;
pub mod error;
pub mod interaction;
pub mod item;
pub mod loader;
pub mod navigation;
pub mod notice;
pub mod plan;
pub mod session;
pub mod stars;
pub mod store;
pub mod timings;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, DEFAULT_RESOURCE};
pub use error::{CatalogError, FailureKind};
pub use interaction::{HoverEffects, HoverLatch, ImageErrorHook};
pub use item::{GiftItem, is_looping_asset};
pub use loader::{LoadOutcome, load_catalog};
pub use navigation::{NavOutcome, follow_intent, resolve_target};
pub use notice::{LOAD_ERROR_PREFIX, Notice, NoticeKind, NoticeSlot, NoticeStage, load_error_message};
pub use plan::{CardPlan, EmptyState, RenderPlan, entrance_delays};
pub use session::{ANIMATION_FLAG_KEY, AnimationFlag};
pub use stars::{STAR_BALANCE, STARS_KEY, persist_star_balance};
pub use store::MemoryStore;
pub use timings::Timings;
pub use view::View;

/// Trait for abstracting catalog retrieval
/// Platform-specific implementations (HTTP fetch, local file) should provide this
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Human-readable name of the resource, used in error messages.
    fn resource(&self) -> &str;

    /// Fetch the raw catalog body.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Fetch`] for a non-success status and
    /// [`CatalogError::Transport`] when the resource cannot be reached at all.
    async fn fetch_catalog(&self) -> Result<String, CatalogError>;
}

/// Trait for abstracting string key-value persistence (browser storage, in-memory doubles)
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a value; removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be accessed.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}
