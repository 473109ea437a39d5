pub mod bounty_store_client;
pub mod jwt;
pub mod withdrawal_gateway_client;
