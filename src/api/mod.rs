pub mod v1;
pub mod error;
pub mod response;
pub mod health;
pub mod insights;
pub mod scenarios;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer, timeout::TimeoutLayer};
use std::time::Duration;
use tower::ServiceBuilder;
use tracing::warn;

use crate::{config::Config, service::AppState};

pub fn router(state: AppState, cfg: &Config) -> Router {
    let mut router = Router::new()
        .nest("/api/v1", v1::router(state));

    if cfg.server.enable_cors {
        if let Some(cors) = cors_layer(&cfg.server.cors_origin) {
            router = router.layer(cors);
        }
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(cfg.server.request_timeout_secs)))
        )
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origin: &str) -> Option<CorsLayer> {
    use tower_http::cors::AllowOrigin;
    let origin = match origin.parse() {
        Ok(origin) => origin,
        Err(e) => {
            warn!(origin, error = %e, "invalid CORS origin, CORS disabled");
            return None;
        }
    };
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::exact(origin))
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    )
}

#[cfg(feature = "metrics")]
pub fn with_metrics(app: Router) -> Router {
    use axum_prometheus::PrometheusMetricLayer;
    let (layer, handle) = PrometheusMetricLayer::pair();

    let metrics_router = Router::new()
        .route("/metrics", axum::routing::get(move || async move { handle.render() }));

    app.layer(layer).merge(metrics_router)
}
