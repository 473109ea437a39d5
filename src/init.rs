use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::mw_ctx::CtxState;
use crate::routes::{auth_routes, reputation_routes, withdrawal_routes};

pub fn main_router(ctx_state: &Arc<CtxState>) -> Router {
    Router::new()
        .route("/hc", get(get_hc))
        .merge(auth_routes::routes(ctx_state.is_development))
        .merge(reputation_routes::routes())
        .merge(withdrawal_routes::routes())
        .with_state(ctx_state.clone())
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn get_hc() -> Response {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    (StatusCode::OK, format!("v{}", VERSION)).into_response()
}
