use giftshelf_catalog::{CatalogError, CatalogSource};
use std::path::{Path, PathBuf};

/// Reads the catalog from a file on disk
pub struct FileCatalogSource {
    path: PathBuf,
    resource: String,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let resource = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Self { path, resource }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalogSource {
    fn resource(&self) -> &str {
        &self.resource
    }

    async fn fetch_catalog(&self) -> Result<String, CatalogError> {
        log::debug!("Reading catalog from {}", self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| CatalogError::Transport(format!("{}: {err}", self.path.display())))
    }
}
