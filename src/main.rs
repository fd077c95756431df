//! Bulk Ethereum funds distribution CLI.
//!
//! Reads recipient addresses from a `;`-delimited file and sends each
//! one a fixed amount of native currency, strictly in sequence, plus a
//! handful of one-off operations (single transfer, message-store
//! read/write, token transfer). Credentials come from the environment
//! (`.env` supported); everything else from flags or a TOML config.

use std::path::PathBuf;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use disburser::chain::{ChainClient, ChainError, ConfirmationStatus, Wallet};
use disburser::config::{
    load_config, DisburseConfig, Settings, PRIVATE_KEY_ENV_VAR,
};
use disburser::contract;
use disburser::recipients;
use disburser::transfer::Disburser;

#[derive(Parser)]
#[command(name = "disburser")]
#[command(about = "Bulk Ethereum funds distribution tool", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RPC endpoint URL (overrides config file and environment)
    #[arg(long)]
    rpc_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send the configured amount to every address in a recipients file
    Disburse {
        /// Recipients file (';'-delimited, first line is a header)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Amount per recipient in wei (overrides config)
        #[arg(long)]
        amount_wei: Option<String>,
    },
    /// Count data records in a recipients file
    Count {
        /// Recipients file to count
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Send a single transfer
    Send {
        /// Destination address
        recipient: String,

        /// Amount in wei (overrides config)
        #[arg(long)]
        amount_wei: Option<String>,

        /// Block until the transaction is mined
        #[arg(long)]
        wait: bool,
    },
    /// Write a message to the message-store contract
    WriteMessage {
        /// Message-store contract address
        contract: String,

        /// Message text to store
        message: String,
    },
    /// Read the current message from the message-store contract
    ReadMessage {
        /// Message-store contract address
        contract: String,
    },
    /// Transfer ERC-20 tokens and wait for inclusion
    TransferToken {
        /// Token contract address
        contract: String,

        /// Recipient address
        recipient: String,

        /// Token amount in base units
        amount: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "disburser=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Counting needs no chain access at all
    if let Commands::Count { file } = &cli.command {
        let records = recipients::count_records(file)?;
        println!("{} records", records);
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DisburseConfig::default(),
    };
    if let Some(rpc_url) = cli.rpc_url.clone() {
        config.rpc_url = rpc_url;
    }
    let settings = Settings::from_env(config)?;

    let client = ChainClient::connect(
        &settings.config.rpc_url,
        Duration::from_secs(settings.config.rpc_timeout_secs),
    )?;
    if let Some(expected) = settings.config.chain_id {
        client.verify_chain_id(expected).await?;
    }

    match cli.command {
        Commands::Disburse { file, amount_wei } => {
            let wallet = wallet_from(&settings)?;
            let amount =
                parse_amount(amount_wei.as_deref().unwrap_or(&settings.config.amount_wei))?;
            let path = file.unwrap_or_else(|| PathBuf::from(&settings.config.recipients_file));

            let addresses = recipients::read_addresses(&path)?;
            tracing::info!(
                file = %path.display(),
                count = addresses.len(),
                "Recipients loaded"
            );

            let driver = Disburser::new(
                client,
                wallet,
                amount,
                Duration::from_millis(settings.config.pacing_ms),
            );
            let hashes = driver.run(&addresses).await?;
            println!("{} transfers submitted", hashes.len());
        }
        Commands::Send {
            recipient,
            amount_wei,
            wait,
        } => {
            let wallet = wallet_from(&settings)?;
            let amount =
                parse_amount(amount_wei.as_deref().unwrap_or(&settings.config.amount_wei))?;

            let driver = Disburser::new(
                client,
                wallet,
                amount,
                Duration::from_millis(settings.config.pacing_ms),
            );
            let wait_timeout =
                wait.then(|| Duration::from_secs(settings.config.confirmation_timeout_secs));
            let (tx_hash, status) = driver.send_one(&recipient, wait_timeout).await?;

            match status {
                Some(ConfirmationStatus::Confirmed { block_number }) => {
                    println!("{} mined in block {}", tx_hash, block_number);
                }
                _ => println!("{} submitted", tx_hash),
            }
        }
        Commands::WriteMessage { contract: store, message } => {
            let wallet = wallet_from(&settings)?;
            let store = parse_address(&store)?;
            let tx_hash = contract::write_message(&wallet, &client, store, &message).await?;
            println!("{} submitted", tx_hash);
        }
        Commands::ReadMessage { contract: store } => {
            let store = parse_address(&store)?;
            let message = contract::read_message(&client, store).await?;
            println!("{}", message);
        }
        Commands::TransferToken {
            contract: token,
            recipient,
            amount,
        } => {
            let wallet = wallet_from(&settings)?;
            let token = parse_address(&token)?;
            let recipient = parse_address(&recipient)?;
            let amount = parse_amount(&amount)?;

            let (tx_hash, status) = contract::transfer_token(
                &wallet,
                &client,
                token,
                recipient,
                amount,
                Duration::from_secs(settings.config.confirmation_timeout_secs),
            )
            .await?;
            if let ConfirmationStatus::Confirmed { block_number } = status {
                println!("{} mined in block {}", tx_hash, block_number);
            }
        }
        Commands::Count { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn wallet_from(settings: &Settings) -> Result<Wallet, Box<dyn std::error::Error>> {
    let key = settings
        .private_key
        .as_deref()
        .ok_or_else(|| format!("{} not set", PRIVATE_KEY_ENV_VAR))?;
    Ok(Wallet::from_hex(key)?)
}

fn parse_amount(raw: &str) -> Result<U256, Box<dyn std::error::Error>> {
    raw.parse::<U256>()
        .map_err(|e| format!("invalid amount '{}': {}", raw, e).into())
}

fn parse_address(raw: &str) -> Result<Address, ChainError> {
    raw.parse()
        .map_err(|e| ChainError::InvalidAddress(format!("'{}': {}", raw, e)))
}
