use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::interfaces::withdrawal_gateway::{WithdrawalGatewayError, WithdrawalGatewayInterface};

/// HTTP client to the withdrawal processing service.
pub struct HttpWithdrawalGateway {
    base_url: String,
    client: Client,
}

impl HttpWithdrawalGateway {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitRequest<'a> {
    user_id: &'a str,
    amount: f64,
    currency: &'a str,
    destination_id: &'a str,
    origin_ip: &'a str,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    error: Option<String>,
}

#[async_trait]
impl WithdrawalGatewayInterface for HttpWithdrawalGateway {
    async fn submit(
        &self,
        user_id: &str,
        amount: f64,
        currency: &str,
        destination_id: &str,
        origin_ip: &str,
    ) -> Result<Value, WithdrawalGatewayError> {
        let res = self
            .client
            .post(format!("{}/api/withdrawals", self.base_url))
            .json(&SubmitRequest {
                user_id,
                amount,
                currency,
                destination_id,
                origin_ip,
            })
            .send()
            .await
            .map_err(|err| WithdrawalGatewayError::Internal(err.to_string()))?;

        let status = res.status();

        if status.is_success() {
            return res
                .json::<Value>()
                .await
                .map_err(|err| WithdrawalGatewayError::Internal(err.to_string()));
        }

        let message = res
            .json::<GatewayErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| format!("withdrawal service responded with {status}"));

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(WithdrawalGatewayError::Unauthorized(message))
            }
            status if status.is_client_error() => Err(WithdrawalGatewayError::Validation(message)),
            _ => Err(WithdrawalGatewayError::Internal(message)),
        }
    }
}
