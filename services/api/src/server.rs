use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryRecommendationStore};
use crate::routes::with_relief_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use relief_finder::config::AppConfig;
use relief_finder::error::AppError;
use relief_finder::matching::{MatchEngine, ProgramCatalog, ReliefService};
use relief_finder::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let store = Arc::new(InMemoryRecommendationStore::default());
    let relief_service = Arc::new(ReliefService::new(
        ProgramCatalog::standard(),
        MatchEngine::default(),
        store,
        config.recommendations,
    ));

    let app = with_relief_routes(relief_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "relief finder service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
