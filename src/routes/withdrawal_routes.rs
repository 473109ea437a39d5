use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use crate::middleware::ctx::Ctx;
use crate::middleware::error::CtxResult;
use crate::middleware::mw_ctx::CtxState;
use crate::middleware::utils::extractor_utils::{client_ip, JsonBody};
use crate::services::withdrawal_service::{WithdrawInput, WithdrawalService};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new().route("/api/withdrawal/submit", post(submit_withdrawal))
}

async fn submit_withdrawal(
    State(ctx_state): State<Arc<CtxState>>,
    ctx: Ctx,
    headers: HeaderMap,
    body: Result<JsonBody<WithdrawInput>, Response>,
) -> CtxResult<Response> {
    // the requester is the authenticated identity, never the body;
    // checked before the body is even looked at
    let user_id = ctx.user_id()?;

    let JsonBody(input) = match body {
        Ok(body) => body,
        Err(rejection) => return Ok(rejection),
    };

    let origin_ip = client_ip(&headers);

    let withdrawal_service = WithdrawalService {
        gateway: &ctx_state.withdrawal_gateway,
        ctx: &ctx,
    };
    let result = withdrawal_service
        .submit(&user_id, input, &origin_ip)
        .await?;

    Ok(Json(result).into_response())
}
