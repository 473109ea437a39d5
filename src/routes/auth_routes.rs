use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_cookies::{Cookie, Cookies};

use crate::middleware::error::{AppError, CtxResult};
use crate::middleware::mw_ctx::{CtxState, JWT_KEY};

pub fn routes(is_development: bool) -> Router<Arc<CtxState>> {
    let mut router = Router::new();

    if is_development {
        router = router.route("/test/api/login/:user_id", get(test_login));
    }

    router
}

/// Development-only identity issuance. The real authentication provider
/// lives outside this server; tests and local setups mint a session here.
async fn test_login(
    State(ctx_state): State<Arc<CtxState>>,
    cookies: Cookies,
    Path(user_id): Path<String>,
) -> CtxResult<Response> {
    if !ctx_state.is_development {
        return Err(AppError::Generic {
            description: "Endpoint only available in development mode".to_string(),
        }
        .into());
    }

    let token = ctx_state
        .jwt
        .create_by_login(&user_id)
        .map_err(|description| AppError::Generic { description })?;

    cookies.add(
        Cookie::build((JWT_KEY, token))
            // if not set, the path defaults to the path from which it was called
            .path("/")
            .http_only(true)
            .into(),
    );

    Ok((StatusCode::OK, user_id).into_response())
}
