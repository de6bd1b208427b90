pub mod calculations;
pub mod contract;
pub mod error;
pub mod events;
pub mod execute;
pub mod messaging;
pub mod msg;
pub mod query;
pub mod state;
pub mod validation;

// Re-export core items if desired
pub use crate::error::ContractError;
