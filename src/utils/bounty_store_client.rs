use async_trait::async_trait;
use reqwest::Client;

use crate::entities::bounty::bounty_entity::Bounty;
use crate::interfaces::bounty_store::BountyStoreInterface;

/// HTTP client to the bounty record store.
pub struct HttpBountyStore {
    base_url: String,
    client: Client,
}

impl HttpBountyStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl BountyStoreInterface for HttpBountyStore {
    async fn get_all_bounties(&self) -> Result<Vec<Bounty>, String> {
        let res = self
            .client
            .get(format!("{}/api/bounties", self.base_url))
            .send()
            .await
            .map_err(|err| err.to_string())?;

        if !res.status().is_success() {
            return Err(format!("bounty store responded with {}", res.status()));
        }

        res.json::<Vec<Bounty>>().await.map_err(|err| err.to_string())
    }
}
