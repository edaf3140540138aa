use crate::primitives::UnspentOutput;

/// Outputs that carry lovelace and nothing else, in input order.
pub fn lovelace_only(utxos: &[UnspentOutput]) -> Vec<UnspentOutput> {
    utxos
        .iter()
        .filter(|utxo| utxo.is_lovelace_only())
        .cloned()
        .collect()
}
