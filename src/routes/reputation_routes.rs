use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::middleware::ctx::Ctx;
use crate::middleware::error::CtxResult;
use crate::middleware::mw_ctx::CtxState;
use crate::middleware::utils::extractor_utils::PaginationParams;
use crate::services::completion_history_service::{
    CompletionHistoryService, CompletionHistoryView, Pagination,
};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new().route(
        "/api/reputation/:user_id/completion-history",
        get(get_completion_history),
    )
}

async fn get_completion_history(
    State(ctx_state): State<Arc<CtxState>>,
    ctx: Ctx,
    Path(user_id): Path<String>,
    Query(params): Query<PaginationParams>,
) -> CtxResult<Json<CompletionHistoryView>> {
    // fail fast before the store is touched
    ctx.user_id()?;

    let pagination = Pagination {
        limit: params.effective_limit(),
        offset: params.effective_offset(),
    };

    let history_service = CompletionHistoryService {
        store: &ctx_state.bounty_store,
        ctx: &ctx,
    };
    let view = history_service
        .completed_by_user(&user_id, pagination)
        .await?;

    Ok(Json(view))
}
