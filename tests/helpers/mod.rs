use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::{TestServer, TestServerConfig};
use chrono::{DateTime, Duration, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use serde_json::{json, Value};

use bountyboard_server::entities::bounty::bounty_entity::{Bounty, BountyStatus};
use bountyboard_server::interfaces::bounty_store::BountyStoreInterface;
use bountyboard_server::interfaces::withdrawal_gateway::{
    WithdrawalGatewayError, WithdrawalGatewayInterface,
};
use bountyboard_server::middleware::mw_ctx::CtxState;
use bountyboard_server::utils::jwt::JWT;

pub struct InMemoryBountyStore {
    bounties: Vec<Bounty>,
    fetches: AtomicUsize,
}

impl InMemoryBountyStore {
    pub fn new(bounties: Vec<Bounty>) -> Self {
        Self {
            bounties,
            fetches: AtomicUsize::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BountyStoreInterface for InMemoryBountyStore {
    async fn get_all_bounties(&self) -> Result<Vec<Bounty>, String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.bounties.clone())
    }
}

pub struct FailingBountyStore;

#[async_trait]
impl BountyStoreInterface for FailingBountyStore {
    async fn get_all_bounties(&self) -> Result<Vec<Bounty>, String> {
        Err("connection refused".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct SubmittedWithdrawal {
    pub user_id: String,
    pub amount: f64,
    pub currency: String,
    pub destination_id: String,
    pub origin_ip: String,
}

/// Stands in for the external withdrawal service: rejects non-positive
/// amounts the way the real service would, records every submission.
pub struct MockWithdrawalGateway {
    submissions: Mutex<Vec<SubmittedWithdrawal>>,
    fail_with: Mutex<Option<WithdrawalGatewayError>>,
}

impl MockWithdrawalGateway {
    pub fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    #[allow(dead_code)]
    pub fn fail_with(&self, error: WithdrawalGatewayError) {
        *self.fail_with.lock().unwrap() = Some(error);
    }

    pub fn submissions(&self) -> Vec<SubmittedWithdrawal> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl WithdrawalGatewayInterface for MockWithdrawalGateway {
    async fn submit(
        &self,
        user_id: &str,
        amount: f64,
        currency: &str,
        destination_id: &str,
        origin_ip: &str,
    ) -> Result<Value, WithdrawalGatewayError> {
        self.submissions.lock().unwrap().push(SubmittedWithdrawal {
            user_id: user_id.to_string(),
            amount,
            currency: currency.to_string(),
            destination_id: destination_id.to_string(),
            origin_ip: origin_ip.to_string(),
        });

        if let Some(error) = self.fail_with.lock().unwrap().clone() {
            return Err(error);
        }

        if amount <= 0.0 {
            return Err(WithdrawalGatewayError::Validation(
                "amount must be positive".to_string(),
            ));
        }

        Ok(json!({
            "id": "wd-1",
            "status": "pending",
            "amount": amount,
            "currency": currency,
        }))
    }
}

pub fn create_test_server_with(
    store: Arc<dyn BountyStoreInterface + Send + Sync>,
    gateway: Arc<dyn WithdrawalGatewayInterface + Send + Sync>,
) -> (TestServer, Arc<CtxState>) {
    let ctx_state = Arc::new(CtxState {
        bounty_store: store,
        withdrawal_gateway: gateway,
        jwt: JWT::new("secret".to_string(), Duration::days(1)),
        is_development: true,
    });

    let routes_all = bountyboard_server::init::main_router(&ctx_state);

    let server = TestServer::new_with_config(
        routes_all,
        TestServerConfig {
            transport: None,
            save_cookies: true,
            expect_success_by_default: false,
            restrict_requests_with_http_schema: false,
            default_content_type: None,
            default_scheme: None,
        },
    )
    .expect("Failed to create test server");

    (server, ctx_state)
}

#[allow(dead_code)]
pub fn create_test_server(
    bounties: Vec<Bounty>,
) -> (
    TestServer,
    Arc<InMemoryBountyStore>,
    Arc<MockWithdrawalGateway>,
) {
    let store = Arc::new(InMemoryBountyStore::new(bounties));
    let gateway = Arc::new(MockWithdrawalGateway::new());
    let (server, _) = create_test_server_with(store.clone(), gateway.clone());
    (server, store, gateway)
}

#[allow(dead_code)]
pub async fn login_as(server: &TestServer, user_id: &str) {
    let login_response = server.get(&format!("/test/api/login/{user_id}")).await;
    login_response.assert_status_success();
}

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap()
}

#[allow(dead_code)]
pub fn closed_bounty(id: &str, claimed_by: &str) -> Bounty {
    Bounty {
        id: id.to_string(),
        status: BountyStatus::Closed,
        claimed_by: Some(claimed_by.to_string()),
        issue_title: Sentence(3..6).fake(),
        project_name: CompanyName().fake(),
        project_logo_url: None,
        difficulty: Some("advanced".to_string()),
        reward_amount: Some(500.0),
        reward_currency: "USDC".to_string(),
        claimed_at: Some(ts("2024-01-01T00:00:00Z")),
        created_at: ts("2023-12-20T00:00:00Z"),
        updated_at: ts("2024-01-03T00:00:00Z"),
    }
}

#[allow(dead_code)]
pub fn open_bounty(id: &str) -> Bounty {
    Bounty {
        id: id.to_string(),
        status: BountyStatus::Open,
        claimed_by: None,
        issue_title: Sentence(3..6).fake(),
        project_name: CompanyName().fake(),
        project_logo_url: None,
        difficulty: Some("beginner".to_string()),
        reward_amount: Some(100.0),
        reward_currency: "USDC".to_string(),
        claimed_at: None,
        created_at: ts("2024-02-01T00:00:00Z"),
        updated_at: ts("2024-02-01T00:00:00Z"),
    }
}
