pub mod bounty_entity;
