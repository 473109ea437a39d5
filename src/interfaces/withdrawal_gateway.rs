use async_trait::async_trait;
use serde_json::Value;

/// Failure kinds the withdrawal service can report, tagged at the boundary
/// instead of probing error objects for optional status fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalGatewayError {
    /// Caller-supplied input rejected (bad amount, unsupported currency,
    /// unknown destination, ...). Message is safe to surface.
    Validation(String),
    Unauthorized(String),
    /// System failure on the gateway side or on the wire. The pipeline must
    /// not retry - it can't tell whether the transfer was committed.
    Internal(String),
}

/// Boundary to the external withdrawal processing service. Balance checks,
/// min/max amounts, currency support, destination verification and the
/// dedup window all live behind this trait.
#[async_trait]
pub trait WithdrawalGatewayInterface {
    async fn submit(
        &self,
        user_id: &str,
        amount: f64,
        currency: &str,
        destination_id: &str,
        origin_ip: &str,
    ) -> Result<Value, WithdrawalGatewayError>;
}
