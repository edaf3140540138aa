//! Selections turned into the shape a transaction builder consumes.
//!
//! Plans name inputs and lovelace amounts only. Fees, witnesses and
//! serialization belong to whichever builder consumes them.

mod provision;
mod tip;

pub use provision::{ProvisionPlan, ProvisionTx};
pub use tip::TipPlan;

use crate::selection::SelectionError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("Tip amount must be greater than zero")]
    ZeroAmount,
}
