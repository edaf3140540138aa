use anyhow::Context as _;
use clap::Parser as _;
use serde_json::{Value, json};
use tipjar::ledger::{SnapshotFile, UtxoSource as _};
use tipjar::plan::{ProvisionPlan, TipPlan};
use tipjar::primitives::UnspentOutput;
use tipjar::selection::{lovelace_only, pack, select_single};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{EnvFilter, Layer as _};

use crate::config::{Command, Config};

mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing `.env` file is fine, configuration may come from the environment
    dotenv::dotenv().ok();
    init_tracing();

    let config = Config::parse();
    let utxos = load_utxos(&config).await?;
    tracing::info!("Loaded {} utxos", utxos.len());

    let output = run(config.command, &utxos)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn run(command: Command, utxos: &[UnspentOutput]) -> anyhow::Result<Value> {
    let output = match command {
        Command::Select { target } => {
            let candidates = lovelace_only(utxos);
            let selected = select_single(&candidates, target)
                .context("could not find a utxo covering the target")?;
            serde_json::to_value(selected)?
        }
        Command::Pack(args) => {
            let groups = pack(utxos, args.into()).context("could not provision payment slots")?;
            serde_json::to_value(groups)?
        }
        Command::Tip { recipient, amount } => {
            let plan = TipPlan::new(utxos, recipient, amount).context("could not plan tip")?;
            json!({
                "input": plan.input,
                "amount": plan.amount,
                "change": plan.change,
            })
        }
        Command::Provision { recipient, pack: args } => {
            let plan = ProvisionPlan::new(utxos, recipient, args.into())
                .context("could not plan provisioning")?;
            let transactions = plan
                .transactions
                .iter()
                .map(|tx| {
                    json!({
                        "inputs": tx.inputs,
                        "outputs": tx.outputs,
                        "change": tx.change,
                    })
                })
                .collect::<Vec<_>>();
            json!({
                "slots": plan.total_slots(),
                "transactions": transactions,
            })
        }
    };
    Ok(output)
}

async fn load_utxos(config: &Config) -> anyhow::Result<Vec<UnspentOutput>> {
    let source = SnapshotFile::new(&config.utxos_path);
    match &config.wallet_address {
        Some(address) => source.utxos_at(address).await,
        None => source.load().await,
    }
}

fn init_tracing() {
    let fmt = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_default_env());
    let _ = tracing_subscriber::registry().with(fmt).try_init();
}
