use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pallas::ledger::addresses::Address;
use tipjar::selection::{DEFAULT_AMOUNT_PER_TX, DEFAULT_MIN_LOVELACE, PackParams};

/// The configuration parameters for the application.
///
/// These can either be passed on the command line, or pulled from environment variables.
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
#[derive(Parser, Debug)]
#[command(name = "tipjar", about = "Pick and group UTxOs for tip jar payments")]
pub struct Config {
    /// Path to a JSON array of UTxOs, as exported by a wallet or indexer.
    #[arg(long, env)]
    pub utxos_path: PathBuf,

    /// Only consider UTxOs held at this address. All UTxOs in the snapshot are
    /// used when unset.
    #[arg(long, env)]
    pub wallet_address: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find one lovelace-only UTxO holding at least `target` lovelace
    Select {
        #[arg(long)]
        target: u64,
    },
    /// Group lovelace-only UTxOs to provision `total` payment slots
    Pack(PackArgs),
    /// Plan a single tip to `recipient`
    Tip {
        #[arg(long, value_parser = parse_address)]
        recipient: Address,
        #[arg(long)]
        amount: u64,
    },
    /// Plan the transactions that provision payment slots at `recipient`
    Provision {
        #[arg(long, value_parser = parse_address)]
        recipient: Address,
        #[command(flatten)]
        pack: PackArgs,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PackArgs {
    /// Number of payment slots to provision
    #[arg(long)]
    pub total: u64,

    /// Slots per transaction
    #[arg(long, env, default_value_t = DEFAULT_AMOUNT_PER_TX)]
    pub amount_per_tx: u64,

    /// Lovelace per slot
    #[arg(long, env, default_value_t = DEFAULT_MIN_LOVELACE)]
    pub min_lovelace: u64,
}

impl From<PackArgs> for PackParams {
    fn from(args: PackArgs) -> Self {
        PackParams::new(args.total)
            .amount_per_tx(args.amount_per_tx)
            .min_lovelace(args.min_lovelace)
    }
}

fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_bech32(s).map_err(|err| format!("Invalid address {}: {:?}", s, err))
}
