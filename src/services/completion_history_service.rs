use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::entities::reputation::completion_record::CompletionRecord;
use crate::interfaces::bounty_store::BountyStoreInterface;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxResult};

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionHistoryView {
    pub records: Vec<CompletionRecord>,
    pub total_count: usize,
    pub has_more: bool,
}

pub struct CompletionHistoryService<'a> {
    pub store: &'a Arc<dyn BountyStoreInterface + Send + Sync>,
    pub ctx: &'a Ctx,
}

impl<'a> CompletionHistoryService<'a> {
    /// Completed work for one user: full fetch, in-memory filter, then
    /// paginate. Order is whatever the store returns - recency-first is
    /// deliberately not promised here.
    pub async fn completed_by_user(
        &self,
        user_id: &str,
        pagination: Pagination,
    ) -> CtxResult<CompletionHistoryView> {
        let bounties = self.store.get_all_bounties().await.map_err(|source| {
            tracing::error!("bounty store fetch failed: {source}");
            self.ctx.to_ctx_error(AppError::BountyStore { source })
        })?;

        let completed: Vec<_> = bounties
            .iter()
            .filter(|bounty| bounty.is_completed_by(user_id))
            .collect();

        // counted before pagination, independent of limit/offset
        let total_count = completed.len();

        let records: Vec<CompletionRecord> = completed
            .into_iter()
            .skip(pagination.offset)
            .take(pagination.limit)
            .map(CompletionRecord::from_bounty)
            .collect();

        let has_more = pagination.offset + records.len() < total_count;

        Ok(CompletionHistoryView {
            records,
            total_count,
            has_more,
        })
    }
}
