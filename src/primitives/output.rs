use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{LOVELACE, OutputReference, PrimitiveError};

/// A non-negative token quantity. On the wire it is a decimal string so that
/// large values survive JSON number handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quantity(pub u64);

impl FromStr for Quantity {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PrimitiveError::InvalidQuantity(s.into()));
        }
        s.parse()
            .map(Self)
            .map_err(|_| PrimitiveError::InvalidQuantity(s.into()))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub unit: String,
    pub quantity: Quantity,
}

impl Amount {
    pub fn new(unit: impl Into<String>, quantity: u64) -> Self {
        Self {
            unit: unit.into(),
            quantity: Quantity(quantity),
        }
    }

    pub fn lovelace(quantity: u64) -> Self {
        Self::new(LOVELACE, quantity)
    }
}

/// A spendable output as reported by a ledger query. Read-only snapshot data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawUtxo", into = "RawUtxo")]
pub struct UnspentOutput {
    pub reference: OutputReference,
    /// Bech32 or legacy base58 address, as reported.
    pub address: String,
    pub amounts: Vec<Amount>,
}

impl UnspentOutput {
    /// An output holding only `lovelace`.
    pub fn new(reference: OutputReference, address: impl Into<String>, lovelace: u64) -> Self {
        Self {
            reference,
            address: address.into(),
            amounts: vec![Amount::lovelace(lovelace)],
        }
    }

    pub fn add_amount(mut self, unit: impl Into<String>, quantity: u64) -> Self {
        self.amounts.push(Amount::new(unit, quantity));
        self
    }

    /// Quantity of the lovelace entry, zero if there is none.
    pub fn lovelace(&self) -> u64 {
        self.amounts
            .iter()
            .find(|amount| amount.unit == LOVELACE)
            .map(|amount| amount.quantity.0)
            .unwrap_or(0)
    }

    /// True iff the output carries exactly one amount and it is lovelace.
    pub fn is_lovelace_only(&self) -> bool {
        matches!(self.amounts.as_slice(), [amount] if amount.unit == LOVELACE)
    }
}

#[derive(Serialize, Deserialize)]
struct RawUtxo {
    input: OutputReference,
    output: RawOutput,
}

#[derive(Serialize, Deserialize)]
struct RawOutput {
    address: String,
    amount: Vec<Amount>,
}

impl From<RawUtxo> for UnspentOutput {
    fn from(raw: RawUtxo) -> Self {
        Self {
            reference: raw.input,
            address: raw.output.address,
            amounts: raw.output.amount,
        }
    }
}

impl From<UnspentOutput> for RawUtxo {
    fn from(utxo: UnspentOutput) -> Self {
        Self {
            input: utxo.reference,
            output: RawOutput {
                address: utxo.address,
                amount: utxo.amounts,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::TxHash;

    const SNAPSHOT: &str = r#"{
        "input": {
            "txHash": "1111111111111111111111111111111111111111111111111111111111111111",
            "outputIndex": 3
        },
        "output": {
            "address": "addr_test1vpu5vlrf4xkxv2qpwngf6cjhtw542ayty80v8dyr49rf5egfu2p0u",
            "amount": [
                { "unit": "lovelace", "quantity": "18446744073709551615" },
                { "unit": "deadbeef746970", "quantity": "1" }
            ]
        }
    }"#;

    #[test]
    fn decodes_snapshot_shape() {
        let utxo: UnspentOutput = serde_json::from_str(SNAPSHOT).unwrap();
        assert_eq!(utxo.reference, OutputReference::new(TxHash([0x11; 32]), 3));
        assert_eq!(utxo.lovelace(), u64::MAX);
        assert_eq!(utxo.amounts.len(), 2);
        assert!(!utxo.is_lovelace_only());
    }

    #[test]
    fn quantity_must_be_a_decimal_string() {
        for bad in ["", "-1", "+5", "1.5", "0x10", "18446744073709551616"] {
            assert!(bad.parse::<Quantity>().is_err(), "accepted {bad:?}");
        }
        let numeric = SNAPSHOT.replace("\"18446744073709551615\"", "5");
        assert!(serde_json::from_str::<UnspentOutput>(&numeric).is_err());
    }

    #[test]
    fn encodes_quantity_as_string() {
        let utxo = UnspentOutput::new(OutputReference::new(TxHash([0; 32]), 0), "addr", 42);
        let json = serde_json::to_value(&utxo).unwrap();
        assert_eq!(json["output"]["amount"][0]["quantity"], "42");
        assert_eq!(json["input"]["outputIndex"], 0);
    }

    #[test]
    fn lovelace_only_requires_a_single_lovelace_entry() {
        let reference = OutputReference::new(TxHash([0; 32]), 0);
        let plain = UnspentOutput::new(reference, "addr", 1);
        assert!(plain.is_lovelace_only());

        let token_only = UnspentOutput {
            reference,
            address: "addr".into(),
            amounts: vec![Amount::new("cafe", 1)],
        };
        assert!(!token_only.is_lovelace_only());
        assert_eq!(token_only.lovelace(), 0);

        let empty = UnspentOutput {
            reference,
            address: "addr".into(),
            amounts: vec![],
        };
        assert!(!empty.is_lovelace_only());
    }
}
