//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::store::AssetSource;

/// Build the top-level axum [`Router`].
///
/// Serves assets under `/assets` from `source` alongside `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(source: AssetSource) -> Router {
    let router = Router::new().route("/health", get(health_check));
    let router = match source {
        AssetSource::Disk { root } => {
            router.nest_service("/assets", crate::assets::hot_reload(&root))
        }
        AssetSource::Memory(store) => router.nest(
            "/assets",
            Router::new()
                .route("/{*path}", get(crate::assets::get))
                .with_state(store),
        ),
    };
    router.layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
