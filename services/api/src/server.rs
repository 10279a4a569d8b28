use crate::cli::ServeArgs;
use crate::demo::seed_sample_portfolio;
use crate::infra::AppState;
use crate::routes::with_portfolio_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rentledger::config::AppConfig;
use rentledger::error::AppError;
use rentledger::portfolio::{LeasingService, MemoryStore};
use rentledger::telemetry;
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

    let store = Arc::new(MemoryStore::default());
    let service = Arc::new(LeasingService::new(store));
    if args.seed {
        let property_id = seed_sample_portfolio(&service)?;
        info!(%property_id, "seeded sample portfolio");
    }

    let app = with_portfolio_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "rent ledger api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
