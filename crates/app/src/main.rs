use std::{error::Error, fs, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use engine::{Group, Receipt};

#[derive(Parser, Debug)]
#[command(name = "quota")]
#[command(about = "Split a parsed receipt among a group and emit payment artifacts")]
struct Cli {
    /// Log level filter (also read from `QUOTA_LOG`).
    #[arg(long, env = "QUOTA_LOG", default_value = "info")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shareable settlement message with payment deep links.
    Message(MessageArgs),
    /// Print the API-ready JSON payload.
    Payload(PayloadArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Path to the parsed receipt JSON.
    #[arg(long)]
    receipt: PathBuf,

    /// Path to the group roster JSON.
    #[arg(long)]
    group: PathBuf,
}

#[derive(Args, Debug)]
struct MessageArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Payment username the deep links should target (also read from
    /// `QUOTA_PAYMENT_HANDLE`).
    #[arg(long, env = "QUOTA_PAYMENT_HANDLE")]
    payment_handle: String,
}

#[derive(Args, Debug)]
struct PayloadArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Identifier the backend uses for this receipt.
    #[arg(long)]
    receipt_id: String,
}

fn load_inputs(input: &InputArgs) -> Result<(Receipt, Group), Box<dyn Error + Send + Sync>> {
    let receipt = Receipt::from_json(&fs::read_to_string(&input.receipt)?)?;
    let group = Group::from_json(&fs::read_to_string(&input.group)?)?;
    Ok((receipt, group))
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("quota={level},engine={level}", level = cli.log))
        .init();

    match cli.command {
        Command::Message(args) => {
            let (receipt, group) = load_inputs(&args.input)?;
            let ledger = engine::process_receipt(&receipt, &group)?;
            tracing::info!(
                participants = ledger.len(),
                attributed = ledger.total_subtotal(),
                "receipt processed"
            );
            let message = engine::generate_group_message(&ledger, &args.payment_handle)?;
            println!("{message}");
        }
        Command::Payload(args) => {
            let (receipt, group) = load_inputs(&args.input)?;
            let ledger = engine::process_receipt(&receipt, &group)?;
            tracing::info!(
                participants = ledger.len(),
                attributed = ledger.total_subtotal(),
                "receipt processed"
            );
            let payload = engine::format_for_api(&ledger, &args.receipt_id);
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
