use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::interfaces::withdrawal_gateway::{WithdrawalGatewayError, WithdrawalGatewayInterface};
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, CtxResult};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawInput {
    pub amount: f64,
    pub currency: String,
    pub destination_id: String,
}

pub struct WithdrawalService<'a> {
    pub gateway: &'a Arc<dyn WithdrawalGatewayInterface + Send + Sync>,
    pub ctx: &'a Ctx,
}

impl<'a> WithdrawalService<'a> {
    /// Thin, faithful relay to the withdrawal service. All business
    /// validation happens on the other side of the gateway; failures are
    /// translated into the error taxonomy unchanged in meaning and are
    /// never retried - a failed submission can't be distinguished from a
    /// committed one, so re-submitting is the caller's call.
    pub async fn submit(
        &self,
        user_id: &str,
        input: WithdrawInput,
        origin_ip: &str,
    ) -> CtxResult<Value> {
        let result = self
            .gateway
            .submit(
                user_id,
                input.amount,
                &input.currency,
                &input.destination_id,
                origin_ip,
            )
            .await;

        result.map_err(|err| {
            let error = match err {
                WithdrawalGatewayError::Validation(description) => {
                    AppError::Validation { description }
                }
                WithdrawalGatewayError::Unauthorized(description) => {
                    tracing::warn!("withdrawal gateway rejected identity: {description}");
                    AppError::AuthenticationFail { description }
                }
                WithdrawalGatewayError::Internal(source) => {
                    tracing::error!("withdrawal gateway failure: {source}");
                    AppError::WithdrawalGateway { source }
                }
            };
            self.ctx.to_ctx_error(error)
        })
    }
}
