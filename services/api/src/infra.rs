use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;

use flatfly::auth::StubAuthenticator;
use flatfly::config::CatalogConfig;
use flatfly::housing::catalog::{CatalogSource, CsvFileCatalog, SampleCatalog};
use flatfly::housing::{FeatureToggle, HousingService, UserProfile};
use flatfly::onboarding::Checklist;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type SharedAuthenticator = Arc<Mutex<StubAuthenticator>>;
pub(crate) type SharedChecklist = Arc<Mutex<Checklist>>;
pub(crate) type SharedHousingService = Arc<HousingService<Box<dyn CatalogSource>>>;

/// Picks the catalog source the housing service reads: a CSV export
/// when configured, the built-in sample catalog otherwise.
pub(crate) fn catalog_source(config: &CatalogConfig) -> Box<dyn CatalogSource> {
    match &config.csv_path {
        Some(path) => Box::new(CsvFileCatalog::new(path.clone())),
        None => Box::new(SampleCatalog),
    }
}

pub(crate) fn housing_service(config: &CatalogConfig) -> SharedHousingService {
    Arc::new(HousingService::new(
        catalog_source(config),
        UserProfile::default(),
    ))
}

/// Maps the CLI's optional yes/no flags onto the tri-state toggle:
/// absent means don't-care.
pub(crate) fn toggle_from_flag(flag: Option<bool>) -> FeatureToggle {
    match flag {
        Some(true) => FeatureToggle::Require,
        Some(false) => FeatureToggle::Exclude,
        None => FeatureToggle::Any,
    }
}
