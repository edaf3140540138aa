use tracing::debug;

use super::SelectionError;
use crate::primitives::UnspentOutput;

/// First output, in the order given, whose lovelace is at least `target`.
///
/// Callers that must not spend tokens should pass the result of
/// [`lovelace_only`](super::lovelace_only).
pub fn select_single(
    utxos: &[UnspentOutput],
    target: u64,
) -> Result<&UnspentOutput, SelectionError> {
    if target == 0 {
        return Err(SelectionError::ZeroTarget);
    }

    match utxos.iter().find(|utxo| utxo.lovelace() >= target) {
        Some(utxo) => {
            debug!(
                "Selected {} ({} lovelace) for target {}",
                utxo.reference,
                utxo.lovelace(),
                target
            );
            Ok(utxo)
        }
        None => Err(SelectionError::InsufficientFunds {
            target,
            available: utxos.iter().map(UnspentOutput::lovelace).max().unwrap_or(0),
        }),
    }
}
