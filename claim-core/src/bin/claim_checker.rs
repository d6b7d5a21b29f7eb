//! Claim checker binary.
//!
//! Reads a JSON array of private keys, signs the claim-intent message for
//! each wallet, and prints the allocation the Frame endpoint reports.

use clap::{Parser, ValueEnum};
use claim_core::claim::{run_claim_batch, ClaimStatus, FailurePolicy, WalletOutcome};
use claim_core::crypto::load_key_file;
use claim_core::network::{ClaimClient, ClaimConfig, ClaimNotifier};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Frame Chapter One airdrop allocation checker.
#[derive(Parser, Debug)]
#[command(name = "claim-checker")]
#[command(about = "Check Frame airdrop allocations for a list of wallets")]
#[command(version)]
struct Args {
    /// Path to the JSON array of private keys
    #[arg(long, default_value = "wallets.json")]
    wallets: PathBuf,

    /// Claim endpoint URL override
    #[arg(long)]
    endpoint: Option<String>,

    /// What to do when a single wallet fails
    #[arg(long, value_enum, default_value_t = OnError::Skip)]
    on_error: OnError,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnError {
    /// Stop the run at the first failing wallet
    Abort,
    /// Log the failure and continue with the remaining wallets
    Skip,
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Abort => FailurePolicy::Abort,
            OnError::Skip => FailurePolicy::Skip,
        }
    }
}

/// Renders one line per wallet: green for claimed allocations, blue for
/// unclaimed ones, red when the endpoint reports nothing.
struct ConsoleNotifier;

impl ClaimNotifier for ConsoleNotifier {
    fn notify(&self, outcome: &WalletOutcome) {
        match &outcome.result {
            Ok(ClaimStatus::Eligible(info)) => {
                let line = format!(
                    "Wallet: {} | Has Claimed: {} | Allocation: {} | Rank: {} | Top Percent: {} | Volume Traded: {} | Royalties Paid: {} | Trades Made: {}",
                    info.address,
                    info.has_claimed_points,
                    info.total_allocation,
                    info.rank,
                    info.top_percent,
                    info.volume_traded,
                    info.royalties_paid,
                    info.trades_made,
                );
                if info.has_claimed_points {
                    println!("{}", line.green());
                } else {
                    println!("{}", line.blue());
                }
            }
            Ok(ClaimStatus::NoAllocation { address }) => {
                println!("{}", format!("Wallet: {} | No Allocation", address).red());
            }
            Err(e) => {
                let wallet = outcome
                    .address
                    .as_deref()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", outcome.index));
                error!("Wallet {}: {}", wallet, e);
            }
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let keys = match load_key_file(&args.wallets) {
        Ok(keys) => keys,
        Err(e) => {
            error!("Failed to load key file {:?}: {}", args.wallets, e);
            std::process::exit(1);
        }
    };
    info!("Loaded {} wallet(s) from {:?}", keys.len(), args.wallets);

    let mut config = ClaimConfig::default();
    if let Some(endpoint) = args.endpoint {
        config.endpoint_url = endpoint;
    }

    let client = match ClaimClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let outcomes =
        run_claim_batch(&keys, &client, &ConsoleNotifier, args.on_error.into()).await;

    let failures = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failures > 0 {
        error!("{} of {} wallet(s) failed", failures, outcomes.len());
        std::process::exit(1);
    }
}
