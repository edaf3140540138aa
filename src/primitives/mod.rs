mod hash;
mod input;
mod output;

pub use hash::*;
pub use input::*;
pub use output::*;

/// Unit tag of the base currency in an output's amount list.
pub const LOVELACE: &str = "lovelace";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    /// Transaction hash was not 32 bytes of hex
    #[error("Invalid transaction hash: {0}")]
    InvalidHash(String),
    /// Quantity was not a non-negative decimal integer
    #[error("Invalid quantity: {0:?}")]
    InvalidQuantity(String),
}
