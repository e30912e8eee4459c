use crate::CatalogSource;
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::notice::load_error_message;
use crate::plan::RenderPlan;
use crate::timings::Timings;
use crate::view::View;

/// Result of one load attempt
///
/// Failures never escape the pipeline: they are folded into the generic empty plan and kept
/// here so the caller can log and announce them.
#[derive(Debug)]
pub struct LoadOutcome {
    pub view: View,
    pub plan: RenderPlan,
    pub failure: Option<CatalogError>,
}

impl LoadOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Default-copy notification text for a failed load.
    #[must_use]
    pub fn notice_message(&self) -> Option<String> {
        self.failure
            .as_ref()
            .map(|err| load_error_message(&err.to_string()))
    }
}

/// Fetch, parse and plan the catalog for `view`.
///
/// `animations_played` is the session flag snapshot taken when the page loaded.
#[allow(clippy::future_not_send)] // Browser sources hold `JsFuture`, which is not `Send`.
pub async fn load_catalog<C: CatalogSource>(
    source: &C,
    view: View,
    animations_played: bool,
    timings: &Timings,
) -> LoadOutcome {
    match fetch_and_parse(source).await {
        Ok(catalog) => LoadOutcome {
            view,
            plan: RenderPlan::for_catalog(&catalog, view, animations_played, timings),
            failure: None,
        },
        Err(err) => LoadOutcome {
            view,
            plan: RenderPlan::failed(),
            failure: Some(err),
        },
    }
}

#[allow(clippy::future_not_send)]
async fn fetch_and_parse<C: CatalogSource>(source: &C) -> Result<Catalog, CatalogError> {
    let body = source.fetch_catalog().await?;
    Catalog::from_json(&body, source.resource())
}
