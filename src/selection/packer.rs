use std::cmp::Reverse;
use std::iter;

use serde::Serialize;
use tracing::{debug, trace};

use super::SelectionError;
use crate::primitives::UnspentOutput;

/// Lovelace each payment slot is provisioned with (5 ADA).
pub const DEFAULT_MIN_LOVELACE: u64 = 5_000_000;
/// Slots per group, which keeps each resulting transaction within output limits.
pub const DEFAULT_AMOUNT_PER_TX: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackParams {
    /// Number of payment slots to provision.
    pub total: u64,
    pub amount_per_tx: u64,
    pub min_lovelace: u64,
}

impl PackParams {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            amount_per_tx: DEFAULT_AMOUNT_PER_TX,
            min_lovelace: DEFAULT_MIN_LOVELACE,
        }
    }

    pub fn amount_per_tx(mut self, amount_per_tx: u64) -> Self {
        self.amount_per_tx = amount_per_tx;
        self
    }

    pub fn min_lovelace(mut self, min_lovelace: u64) -> Self {
        self.min_lovelace = min_lovelace;
        self
    }

    fn validate(&self) -> Result<(), SelectionError> {
        if self.amount_per_tx == 0 {
            return Err(SelectionError::InvalidParams(
                "amount per transaction must be greater than zero",
            ));
        }
        if self.min_lovelace == 0 {
            return Err(SelectionError::InvalidParams(
                "minimum lovelace must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Slot count of every group: the full groups, then the remainder if any.
    fn group_slots(&self) -> impl Iterator<Item = u64> {
        let full = self.total / self.amount_per_tx;
        let remainder = self.total % self.amount_per_tx;
        let full = usize::try_from(full).unwrap_or(usize::MAX);
        iter::repeat(self.amount_per_tx)
            .take(full)
            .chain((remainder > 0).then_some(remainder))
    }
}

impl Default for PackParams {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Outputs that together provision `slots` payments of `min_lovelace` each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub slots: u64,
    pub target: u64,
    /// Lovelace across `outputs`, always strictly above `target`.
    pub sum: u64,
    pub outputs: Vec<UnspentOutput>,
}

/// Greedy largest-first packing of lovelace-only outputs into groups.
///
/// Every group must end with a sum strictly greater than its target. If any
/// group cannot get there the whole request fails; no partial list of groups
/// is ever returned.
pub fn pack(utxos: &[UnspentOutput], params: PackParams) -> Result<Vec<Group>, SelectionError> {
    params.validate()?;

    let mut pool = utxos
        .iter()
        .filter(|utxo| utxo.is_lovelace_only())
        .collect::<Vec<_>>();
    // Stable, so equal values keep their input order.
    pool.sort_by_key(|utxo| Reverse(utxo.lovelace()));

    let mut groups = vec![];
    let mut cursor = 0;
    for (group, slots) in params.group_slots().enumerate() {
        let target = slots
            .checked_mul(params.min_lovelace)
            .ok_or(SelectionError::TargetOverflow)?;

        let start = cursor;
        let mut sum = 0u64;
        // NOTE: strictly greater, an exact fit keeps consuming
        while sum <= target && cursor < pool.len() {
            trace!("Group {} takes {}", group, pool[cursor].reference);
            sum = sum.saturating_add(pool[cursor].lovelace());
            cursor += 1;
        }

        if sum <= target {
            debug!(
                "Group {} unfilled: {} lovelace for a target of {}",
                group, sum, target
            );
            return Err(SelectionError::GroupUnfilled {
                group,
                target,
                available: sum,
            });
        }

        debug!(
            "Group {} filled with {} outputs ({} lovelace, target {})",
            group,
            cursor - start,
            sum,
            target
        );
        groups.push(Group {
            slots,
            target,
            sum,
            outputs: pool[start..cursor].iter().copied().cloned().collect(),
        });
    }

    Ok(groups)
}
