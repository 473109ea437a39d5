use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use chrono::Duration;

use crate::config::AppConfig;
use crate::interfaces::bounty_store::BountyStoreInterface;
use crate::interfaces::withdrawal_gateway::WithdrawalGatewayInterface;
use crate::utils::bounty_store_client::HttpBountyStore;
use crate::utils::jwt::JWT;
use crate::utils::withdrawal_gateway_client::HttpWithdrawalGateway;

pub struct CtxState {
    pub bounty_store: Arc<dyn BountyStoreInterface + Send + Sync>,
    pub withdrawal_gateway: Arc<dyn WithdrawalGatewayInterface + Send + Sync>,
    pub jwt: JWT,
    pub is_development: bool,
}

impl Debug for CtxState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("CTX STATE HERE :)")
    }
}

pub fn create_ctx_state(config: &AppConfig) -> Arc<CtxState> {
    let ctx_state = CtxState {
        bounty_store: Arc::new(HttpBountyStore::new(&config.bounty_store_url)),
        withdrawal_gateway: Arc::new(HttpWithdrawalGateway::new(&config.withdrawal_service_url)),
        jwt: JWT::new(config.jwt_secret.clone(), Duration::days(1)),
        is_development: config.is_development,
    };
    Arc::new(ctx_state)
}

pub const JWT_KEY: &str = "jwt";
