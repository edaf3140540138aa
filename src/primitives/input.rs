use std::fmt;

use serde::{Deserialize, Serialize};

use super::TxHash;

/// Pointer to an output of a previous transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OutputReference {
    #[serde(rename = "txHash")]
    pub hash: TxHash,
    #[serde(rename = "outputIndex")]
    pub index: u32,
}

impl OutputReference {
    pub fn new(hash: TxHash, index: u32) -> Self {
        Self { hash, index }
    }
}

impl fmt::Display for OutputReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.hash, self.index)
    }
}
