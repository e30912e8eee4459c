use serde::{Deserialize, Serialize};

/// Everything that can go wrong while loading the catalog.
///
/// All variants are terminal for the load attempt; callers surface the message and fall back to
/// the generic empty state.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP error! status: {status}")]
    Fetch { status: u16 },
    #[error("cannot read {resource}: expected a JSON array")]
    Format { resource: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed record at index {index}: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`CatalogError`], used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Fetch,
    Format,
    Catalog,
}

impl CatalogError {
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Fetch { .. } => FailureKind::Fetch,
            Self::Format { .. } => FailureKind::Format,
            Self::Transport(_) | Self::Json(_) | Self::Record { .. } => FailureKind::Catalog,
        }
    }
}
