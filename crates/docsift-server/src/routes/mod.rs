//! HTTP routes.

pub mod ocr;
pub mod system;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let server = &state.config().server;

    let mut app: Router<AppState> = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/predict", post(system::predict))
        .nest("/ocr", ocr::router())
        .layer(DefaultBodyLimit::max(server.max_upload_bytes))
        .layer(TraceLayer::new_for_http());

    if server.permissive_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app.with_state(state)
}
