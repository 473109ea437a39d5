use async_trait::async_trait;

use crate::entities::bounty::bounty_entity::Bounty;

/// Boundary to the external bounty record store. Expected to be a cheap,
/// consistent read - filtering and pagination happen in this server.
#[async_trait]
pub trait BountyStoreInterface {
    async fn get_all_bounties(&self) -> Result<Vec<Bounty>, String>;
}
