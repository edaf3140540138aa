use pallas::ledger::addresses::Address;
use tracing::info;

use super::PlanError;
use crate::primitives::{OutputReference, UnspentOutput};
use crate::selection::{Group, PackParams, pack};

/// One transaction splitting a group of inputs into equal payment slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionTx {
    pub inputs: Vec<OutputReference>,
    /// One entry per slot.
    pub outputs: Vec<u64>,
    pub change: u64,
}

impl ProvisionTx {
    fn from_group(group: &Group, min_lovelace: u64) -> Self {
        let slots = usize::try_from(group.slots).unwrap_or(usize::MAX);
        Self {
            inputs: group.outputs.iter().map(|utxo| utxo.reference).collect(),
            outputs: vec![min_lovelace; slots],
            change: group.sum - group.target,
        }
    }

    pub fn input_lovelace(&self) -> u64 {
        self.outputs.iter().sum::<u64>() + self.change
    }
}

/// Pre-provisioned payment slots, batched into transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionPlan {
    pub recipient: Address,
    pub transactions: Vec<ProvisionTx>,
}

impl ProvisionPlan {
    pub fn new(
        utxos: &[UnspentOutput],
        recipient: Address,
        params: PackParams,
    ) -> Result<Self, PlanError> {
        let groups = pack(utxos, params)?;
        let transactions = groups
            .iter()
            .map(|group| ProvisionTx::from_group(group, params.min_lovelace))
            .collect::<Vec<_>>();
        info!(
            "Provisioning {} slots across {} transactions",
            params.total,
            transactions.len()
        );

        Ok(Self {
            recipient,
            transactions,
        })
    }

    pub fn total_slots(&self) -> usize {
        self.transactions.iter().map(|tx| tx.outputs.len()).sum()
    }
}
