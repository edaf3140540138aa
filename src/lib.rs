//! UTxO selection, payment-slot provisioning and wallet session handling for a
//! Hydra tip jar.

pub mod ledger;
pub mod plan;
pub mod primitives;
pub mod retry;
pub mod selection;
pub mod wallet;
