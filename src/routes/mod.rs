pub mod auth_routes;
pub mod reputation_routes;
pub mod withdrawal_routes;
