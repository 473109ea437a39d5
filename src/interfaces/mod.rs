pub mod bounty_store;
pub mod withdrawal_gateway;
