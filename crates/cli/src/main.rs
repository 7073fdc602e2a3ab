//! Shoebox CLI - Cart operations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add one unit of product 5 to the cart
//! shoebox add 5
//!
//! # Set product 5's quantity to 3
//! shoebox set 5 3
//!
//! # Remove product 5 from the cart
//! shoebox remove 5
//!
//! # Print the cart contents
//! shoebox show
//! ```
//!
//! Configuration comes from the environment (or a `.env` file):
//! `SHOEBOX_API_BASE_URL` names the catalog API, `SHOEBOX_SNAPSHOT_PATH`
//! the local snapshot file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use shoebox_cart::{CartConfig, CartStore, FileSnapshotStore, HttpCatalog, TracingNotifier};
use shoebox_core::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "shoebox")]
#[command(author, version, about = "Shoebox cart client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add {
        /// Catalog product ID
        product_id: i32,
    },
    /// Remove a product from the cart
    Remove {
        /// Catalog product ID
        product_id: i32,
    },
    /// Set the quantity of a product already in the cart
    Set {
        /// Catalog product ID
        product_id: i32,
        /// New quantity (must be positive and within stock)
        amount: i64,
    },
    /// Print the cart contents
    Show,
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; default to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shoebox_cart=info,shoebox_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    let store = CartStore::open(
        HttpCatalog::new(&config.api_base_url),
        FileSnapshotStore::new(&config.snapshot_path),
        TracingNotifier,
    )
    .await?;

    match cli.command {
        Commands::Add { product_id } => {
            store.add_item(ProductId::new(product_id)).await?;
            commands::print_cart(&store).await;
        }
        Commands::Remove { product_id } => {
            store.remove_item(ProductId::new(product_id)).await?;
            commands::print_cart(&store).await;
        }
        Commands::Set { product_id, amount } => {
            store.update_quantity(ProductId::new(product_id), amount).await?;
            commands::print_cart(&store).await;
        }
        Commands::Show => {
            commands::print_cart(&store).await;
        }
    }
    Ok(())
}
