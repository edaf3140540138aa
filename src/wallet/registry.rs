use tracing::debug;

use super::{WalletApi, WalletError, WalletProvider};

/// The wallets known to the application, looked up by provider name.
pub struct WalletRegistry<W> {
    wallets: Vec<W>,
}

impl<W> Default for WalletRegistry<W> {
    fn default() -> Self {
        Self { wallets: vec![] }
    }
}

impl<W: WalletApi> WalletRegistry<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `wallet`, replacing any wallet of the same provider.
    pub fn register(mut self, wallet: W) -> Self {
        self.wallets.retain(|w| w.provider() != wallet.provider());
        self.wallets.push(wallet);
        self
    }

    pub fn get(&self, provider: WalletProvider) -> Option<&W> {
        self.wallets.iter().find(|w| w.provider() == provider)
    }

    /// Providers that can be connected to right now.
    pub fn installed(&self) -> Vec<WalletProvider> {
        self.wallets
            .iter()
            .filter(|w| w.is_installed())
            .map(|w| w.provider())
            .collect()
    }

    pub fn select(&self, name: &str) -> Result<&W, WalletError> {
        let provider: WalletProvider = name.parse()?;
        let wallet = self
            .get(provider)
            .filter(|w| w.is_installed())
            .ok_or(WalletError::NotInstalled(provider))?;
        debug!("Selected wallet {}", provider);
        Ok(wallet)
    }
}
