use crate::cli::ServeArgs;
use crate::infra::{housing_service, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use tracing::info;

use flatfly::auth::StubAuthenticator;
use flatfly::config::AppConfig;
use flatfly::error::AppError;
use flatfly::onboarding::Checklist;
use flatfly::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let housing = housing_service(&config.catalog);
    let auth = Arc::new(Mutex::new(StubAuthenticator::new()));
    let checklist = Arc::new(Mutex::new(Checklist::relocation_default()));

    let app = with_service_routes(housing, auth, checklist)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "relocation assistant ready");

    axum::serve(listener, app).await?;
    Ok(())
}
