pub mod completion_history_service;
pub mod withdrawal_service;
