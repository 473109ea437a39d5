pub mod bounty;
pub mod reputation;
