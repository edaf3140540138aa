//! Choosing which unspent outputs fund a payment.
//!
//! Everything here is pure computation over a snapshot borrowed from the
//! caller. Nothing is fetched, retried or mutated, so the functions are safe
//! to call concurrently on shared input.

mod filter;
mod packer;
mod single;

pub use filter::lovelace_only;
pub use packer::{DEFAULT_AMOUNT_PER_TX, DEFAULT_MIN_LOVELACE, Group, PackParams, pack};
pub use single::select_single;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// No single output holds at least the target
    #[error("Insufficient funds: need an output of at least {target} lovelace, largest is {available}")]
    InsufficientFunds { target: u64, available: u64 },
    /// The pool ran dry before a group exceeded its target
    #[error(
        "Insufficient funds: group {group} needs more than {target} lovelace, only {available} left"
    )]
    GroupUnfilled {
        group: usize,
        target: u64,
        available: u64,
    },
    #[error("Selection target must be greater than zero")]
    ZeroTarget,
    #[error("Invalid packing parameters: {0}")]
    InvalidParams(&'static str),
    #[error("Group target does not fit in a u64")]
    TargetOverflow,
}

impl SelectionError {
    /// Whether the request failed because the wallet does not hold enough
    /// lovelace, as opposed to being malformed.
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(
            self,
            Self::InsufficientFunds { .. } | Self::GroupUnfilled { .. }
        )
    }
}
