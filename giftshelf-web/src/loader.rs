use crate::dom;
use giftshelf_catalog::{CatalogError, CatalogSource};

/// Fetches the catalog over HTTP from the page's origin
pub struct HttpCatalogSource {
    url: String,
}

impl HttpCatalogSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Source pointed at the configured catalog URL.
    #[must_use]
    pub fn from_config() -> Self {
        Self::new(crate::paths::catalog_url())
    }
}

impl CatalogSource for HttpCatalogSource {
    fn resource(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }

    async fn fetch_catalog(&self) -> Result<String, CatalogError> {
        let response = dom::fetch_response(&self.url)
            .await
            .map_err(|err| CatalogError::Transport(dom::js_error_message(&err)))?;
        if !response.ok() {
            return Err(CatalogError::Fetch {
                status: response.status(),
            });
        }
        dom::response_text(&response)
            .await
            .map_err(|err| CatalogError::Transport(dom::js_error_message(&err)))
    }
}
