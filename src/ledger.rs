//! Boundary to whatever answers "which outputs sit at this address".

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tracing::debug;

use crate::primitives::UnspentOutput;

#[allow(async_fn_in_trait)]
pub trait UtxoSource {
    /// Outputs currently spendable at `address`. Staleness is the source's
    /// concern.
    async fn utxos_at(&self, address: &str) -> anyhow::Result<Vec<UnspentOutput>>;
}

/// In-memory snapshot, filtered by address on query.
impl UtxoSource for Vec<UnspentOutput> {
    async fn utxos_at(&self, address: &str) -> anyhow::Result<Vec<UnspentOutput>> {
        Ok(self
            .iter()
            .filter(|utxo| utxo.address == address)
            .cloned()
            .collect())
    }
}

/// A JSON array of UTxOs on disk, as exported by a wallet or indexer.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every output in the file, regardless of address.
    pub async fn load(&self) -> anyhow::Result<Vec<UnspentOutput>> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("could not read utxo snapshot {}", self.path.display()))?;
        let utxos: Vec<UnspentOutput> = serde_json::from_str(&contents)
            .with_context(|| format!("invalid utxo snapshot {}", self.path.display()))?;
        debug!("Loaded {} utxos from {}", utxos.len(), self.path.display());
        Ok(utxos)
    }
}

impl UtxoSource for SnapshotFile {
    async fn utxos_at(&self, address: &str) -> anyhow::Result<Vec<UnspentOutput>> {
        self.load().await?.utxos_at(address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{OutputReference, TxHash};

    fn utxo(index: u32, address: &str, lovelace: u64) -> UnspentOutput {
        UnspentOutput::new(OutputReference::new(TxHash([9; 32]), index), address, lovelace)
    }

    #[tokio::test]
    async fn static_source_filters_by_address() {
        let utxos = vec![utxo(0, "addr_a", 1), utxo(1, "addr_b", 2), utxo(2, "addr_a", 3)];

        let found = utxos.utxos_at("addr_a").await.unwrap();

        assert_eq!(found, vec![utxos[0].clone(), utxos[2].clone()]);
    }

    #[tokio::test]
    async fn snapshot_file_round_trips_through_disk() {
        let utxos = vec![utxo(0, "addr_a", 5_000_000), utxo(1, "addr_b", 7_000_000)];
        let path = std::env::temp_dir().join(format!("tipjar-snapshot-{}.json", std::process::id()));
        tokio::fs::write(&path, serde_json::to_vec(&utxos).unwrap())
            .await
            .unwrap();

        let source = SnapshotFile::new(&path);
        assert_eq!(source.load().await.unwrap(), utxos);
        assert_eq!(
            source.utxos_at("addr_b").await.unwrap(),
            vec![utxos[1].clone()]
        );

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn snapshot_file_reports_missing_file() {
        let source = SnapshotFile::new("/nonexistent/tipjar/utxos.json");

        let err = source.load().await.unwrap_err();

        assert!(err.to_string().contains("could not read utxo snapshot"));
    }
}
