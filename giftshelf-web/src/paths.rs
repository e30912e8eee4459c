//! Helpers for constructing URLs to pages and static assets that respect the deployment base path.
use giftshelf_catalog::DEFAULT_RESOURCE;

/// When `PUBLIC_URL` is set at compile time (e.g., `/gifts` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL of the catalog resource.
///
/// `GIFTSHELF_CATALOG_URL` overrides the default `gifts.json`; absolute URLs are used as-is.
#[must_use]
pub fn catalog_url() -> String {
    catalog_url_with(option_env!("GIFTSHELF_CATALOG_URL"))
}

fn catalog_url_with(configured: Option<&str>) -> String {
    match configured.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) if url.contains("://") => url.to_string(),
        Some(url) => asset_path(url),
        None => asset_path(DEFAULT_RESOURCE),
    }
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
