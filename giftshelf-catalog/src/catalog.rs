use crate::error::CatalogError;
use crate::item::GiftItem;
use crate::view::View;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default name of the catalog resource served next to the pages.
pub const DEFAULT_RESOURCE: &str = "gifts.json";

/// Ordered list of gift records, order preserved from the source
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<GiftItem>,
}

impl Catalog {
    #[must_use]
    pub const fn empty() -> Self {
        Self { items: Vec::new() }
    }

    #[must_use]
    pub const fn from_items(items: Vec<GiftItem>) -> Self {
        Self { items }
    }

    /// Parse a catalog payload.
    ///
    /// The payload must be a JSON array; each element is then decoded on its own so a bad
    /// record reports its position. Elements must be objects; inside a record only `price` is
    /// checked, display fields of an unexpected type degrade instead of failing the load.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for invalid JSON, [`CatalogError::Format`] when the payload
    /// is not an array, and [`CatalogError::Record`] for an element that is not a gift record.
    pub fn from_json(json: &str, resource: &str) -> Result<Self, CatalogError> {
        let Value::Array(records) = serde_json::from_str::<Value>(json)? else {
            return Err(CatalogError::Format {
                resource: resource.to_string(),
            });
        };

        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| decode_record(index, record))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_items)
    }

    #[must_use]
    pub fn items(&self) -> &[GiftItem] {
        &self.items
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items without a usable price, in source order.
    #[must_use]
    pub fn owned(&self) -> Vec<&GiftItem> {
        self.items.iter().filter(|item| item.is_owned()).collect()
    }

    /// Items with a usable price, in source order.
    #[must_use]
    pub fn market(&self) -> Vec<&GiftItem> {
        self.items.iter().filter(|item| item.is_for_sale()).collect()
    }

    #[must_use]
    pub fn partition(&self, view: View) -> Vec<&GiftItem> {
        match view {
            View::Owned => self.owned(),
            View::Market => self.market(),
        }
    }
}

fn decode_record(index: usize, record: Value) -> Result<GiftItem, CatalogError> {
    let unexpected = match &record {
        Value::Object(_) => None,
        Value::Null => Some(Unexpected::Unit),
        Value::Bool(flag) => Some(Unexpected::Bool(*flag)),
        Value::Number(_) => Some(Unexpected::Other("number")),
        Value::String(text) => Some(Unexpected::Str(text)),
        Value::Array(_) => Some(Unexpected::Seq),
    };
    if let Some(unexpected) = unexpected {
        return Err(CatalogError::Record {
            index,
            source: serde_json::Error::invalid_type(unexpected, &"a gift record object"),
        });
    }
    serde_json::from_value(record).map_err(|source| CatalogError::Record { index, source })
}
