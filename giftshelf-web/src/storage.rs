//! Browser-backed [`KeyValueStore`] implementations.

use crate::dom;
use giftshelf_catalog::KeyValueStore;
use web_sys::Storage;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("{0} unavailable: {1}")]
    Unavailable(&'static str, String),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Which browser storage area to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserStore {
    /// `localStorage`: survives across sessions.
    Local,
    /// `sessionStorage`: cleared when the tab's session ends.
    Session,
}

impl BrowserStore {
    const fn label(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }

    fn handle(self) -> Result<Storage, WebStorageError> {
        let storage = match self {
            Self::Local => dom::local_storage(),
            Self::Session => dom::session_storage(),
        };
        storage.map_err(|err| WebStorageError::Unavailable(self.label(), dom::js_error_message(&err)))
    }
}

impl KeyValueStore for BrowserStore {
    type Error = WebStorageError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.handle()?
            .get_item(key)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.handle()?
            .set_item(key, value)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.handle()?
            .remove_item(key)
            .map_err(|err| WebStorageError::Storage(dom::js_error_message(&err)))
    }
}
