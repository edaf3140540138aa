use pallas::ledger::addresses::Address;
use tracing::{debug, info};

use super::{WalletApi, WalletError, WalletProvider, WalletRegistry};
use crate::plan::{ProvisionPlan, TipPlan};
use crate::primitives::{TxHash, UnspentOutput};
use crate::retry::{RetryPolicy, retry_while};
use crate::selection::PackParams;

/// Connection state for one user. Owned by whoever drives the UI or CLI and
/// passed where it is needed.
pub struct WalletSession<W> {
    retry: RetryPolicy,
    wallet: Option<W>,
    address: Option<String>,
    utxos: Vec<UnspentOutput>,
}

impl<W: WalletApi> WalletSession<W> {
    pub fn new(retry: RetryPolicy) -> Self {
        Self {
            retry,
            wallet: None,
            address: None,
            utxos: vec![],
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    pub fn provider(&self) -> Option<WalletProvider> {
        self.wallet.as_ref().map(|w| w.provider())
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Snapshot taken by the last [`sync`](Self::sync).
    pub fn utxos(&self) -> &[UnspentOutput] {
        &self.utxos
    }

    pub fn lovelace(&self) -> u64 {
        self.utxos.iter().map(UnspentOutput::lovelace).sum()
    }

    /// Enables `wallet` and takes a first snapshot. Replaces any previous
    /// connection. On failure the session is left disconnected.
    pub async fn connect(&mut self, wallet: W) -> Result<(), WalletError> {
        self.disconnect();

        let provider = wallet.provider();
        if !wallet.is_installed() {
            return Err(WalletError::NotInstalled(provider));
        }

        if !wallet.is_enabled().await? {
            retry_while(&self.retry, || wallet.enable(), WalletError::is_transient).await?;
        }

        self.wallet = Some(wallet);
        if let Err(err) = self.sync().await {
            self.disconnect();
            return Err(err);
        }

        info!("Connected to {}", provider);
        Ok(())
    }

    pub async fn connect_by_name(
        &mut self,
        registry: &WalletRegistry<W>,
        name: &str,
    ) -> Result<(), WalletError>
    where
        W: Clone,
    {
        let wallet = registry.select(name)?.clone();
        self.connect(wallet).await
    }

    /// Refreshes the address and UTxO snapshot from the wallet.
    pub async fn sync(&mut self) -> Result<(), WalletError> {
        let wallet = self.wallet.as_ref().ok_or(WalletError::NotConnected)?;

        let address =
            retry_while(&self.retry, || wallet.change_address(), WalletError::is_transient)
                .await?;
        let utxos = retry_while(&self.retry, || wallet.utxos(), WalletError::is_transient).await?;

        debug!("Synced {} utxos for {}", utxos.len(), address);
        self.address = Some(address);
        self.utxos = utxos;
        Ok(())
    }

    pub async fn sign(&self, tx_cbor: &[u8], partial: bool) -> Result<Vec<u8>, WalletError> {
        self.connected()?.sign_tx(tx_cbor, partial).await
    }

    pub async fn submit(&self, tx_cbor: &[u8]) -> Result<TxHash, WalletError> {
        let hash = self.connected()?.submit_tx(tx_cbor).await?;
        info!("Submitted transaction {}", hash);
        Ok(hash)
    }

    /// Drops the connection and snapshot, handing the wallet back.
    pub fn disconnect(&mut self) -> Option<W> {
        self.address = None;
        self.utxos.clear();
        let wallet = self.wallet.take();
        if let Some(wallet) = &wallet {
            info!("Disconnected from {}", wallet.provider());
        }
        wallet
    }

    pub fn plan_tip(&self, recipient: Address, amount: u64) -> Result<TipPlan, WalletError> {
        self.connected()?;
        Ok(TipPlan::new(&self.utxos, recipient, amount)?)
    }

    pub fn plan_provision(
        &self,
        recipient: Address,
        params: PackParams,
    ) -> Result<ProvisionPlan, WalletError> {
        self.connected()?;
        Ok(ProvisionPlan::new(&self.utxos, recipient, params)?)
    }

    fn connected(&self) -> Result<&W, WalletError> {
        self.wallet.as_ref().ok_or(WalletError::NotConnected)
    }
}

impl<W: WalletApi> Default for WalletSession<W> {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}
