use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Marker identifying image assets that loop (animated GIFs).
const LOOPING_ASSET_MARKER: &str = ".gif";

/// A single gift record from the catalog resource.
///
/// Display fields accept whatever the record carries; a value of an unexpected type is shown as
/// text where that makes sense and dropped otherwise. Only `price` is typed strictly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftItem {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(
        default,
        alias = "img",
        deserialize_with = "lenient_image",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<String>,
    /// `null` and a missing key both mean "not for sale".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl GiftItem {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
            number: None,
            price: None,
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Market items carry a usable price; everything else is owned.
    #[must_use]
    pub const fn is_for_sale(&self) -> bool {
        self.price.is_some()
    }

    #[must_use]
    pub const fn is_owned(&self) -> bool {
        !self.is_for_sale()
    }

    #[must_use]
    pub fn has_looping_image(&self) -> bool {
        self.image.as_deref().is_some_and(is_looping_asset)
    }
}

/// Check whether an image reference points at a looping asset.
#[must_use]
pub fn is_looping_asset(src: &str) -> bool {
    src.contains(LOOPING_ASSET_MARKER)
}

/// Render a scalar JSON value as display text; null and containers have none.
fn display_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(display_text(Value::deserialize(deserializer)?))
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(display_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_image<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(src) => Ok(Some(src)),
        _ => Ok(None),
    }
}
