use pallas::ledger::addresses::Address;
use tracing::debug;

use super::PlanError;
use crate::primitives::UnspentOutput;
use crate::selection::{lovelace_only, select_single};

/// A single payment funded by one lovelace-only output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipPlan {
    pub input: UnspentOutput,
    pub recipient: Address,
    pub amount: u64,
    /// Lovelace left on the input after the tip, before fees.
    pub change: u64,
}

impl TipPlan {
    pub fn new(
        utxos: &[UnspentOutput],
        recipient: Address,
        amount: u64,
    ) -> Result<Self, PlanError> {
        if amount == 0 {
            return Err(PlanError::ZeroAmount);
        }

        let candidates = lovelace_only(utxos);
        let input = select_single(&candidates, amount)?.clone();
        let change = input.lovelace() - amount;
        debug!("Tip of {} lovelace funded by {}", amount, input.reference);

        Ok(Self {
            input,
            recipient,
            amount,
            change,
        })
    }
}
