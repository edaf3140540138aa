//! Browser-wallet style connections (CIP-30), expressed as an interface so
//! sessions can be driven by any provider or by a fake in tests.

mod provider;
mod registry;
mod session;

pub use provider::WalletProvider;
pub use registry::WalletRegistry;
pub use session::WalletSession;

use crate::plan::PlanError;
use crate::primitives::{TxHash, UnspentOutput};

/// Capabilities every wallet provider exposes.
#[allow(async_fn_in_trait)]
pub trait WalletApi {
    fn provider(&self) -> WalletProvider;

    /// Whether the provider is available at all on this machine.
    fn is_installed(&self) -> bool;

    async fn is_enabled(&self) -> Result<bool, WalletError>;

    /// Asks the user to grant this application access.
    async fn enable(&self) -> Result<(), WalletError>;

    async fn change_address(&self) -> Result<String, WalletError>;

    async fn utxos(&self) -> Result<Vec<UnspentOutput>, WalletError>;

    /// Returns the witness set for `tx_cbor`. With `partial` the wallet signs
    /// only what it can.
    async fn sign_tx(&self, tx_cbor: &[u8], partial: bool) -> Result<Vec<u8>, WalletError>;

    async fn submit_tx(&self, tx_cbor: &[u8]) -> Result<TxHash, WalletError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("Unknown wallet provider: {0}")]
    UnknownProvider(String),
    #[error("Wallet {0} is not installed")]
    NotInstalled(WalletProvider),
    #[error("No wallet connected")]
    NotConnected,
    /// The user declined the request
    #[error("Wallet refused the request: {0}")]
    Refused(String),
    /// The provider failed to answer, usually because it is still starting up
    #[error("Wallet API error: {0}")]
    Api(String),
    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl WalletError {
    /// Errors worth asking again for. A refusal or a missing wallet will not
    /// change by retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}
