//! # BLVD SAINT Storefront Library
//!
//! Interactive storefront session: browse the catalog, pick a size and
//! quantity, fill a cart and hand it to the payment provider.
//!
//! ## Module Organization
//! ```text
//! blvd_storefront/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── config.rs     ◄─── Store configuration
//! │   ├── seed.rs       ◄─── Seed catalog
//! │   ├── selection.rs  ◄─── Product detail selection
//! │   └── storefront.rs ◄─── Session aggregate + screens
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing & dispatch
//! │   ├── catalog.rs  ◄─── Browse / detail / stock commands
//! │   └── cart.rs     ◄─── Cart & checkout commands
//! ├── checkout.rs     ◄─── Checkout snapshot & gateway
//! ├── render.rs       ◄─── Text views
//! └── error.rs        ◄─── Storefront error type
//! ```
//!
//! ## Session Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin ──► Command ──► commands::execute ──► Storefront ──► render      │
//! │                                                   │                     │
//! │                                   CatalogStore ◄──┼──► CartStore        │
//! │                                                   ▼                     │
//! │                                           CheckoutGateway               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! One `Storefront` owns all mutable state; commands run one at a time.

pub mod checkout;
pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use blvd_core::CartStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

use checkout::LoggingCheckout;
use commands::Command;
use error::Notice;
use state::{seed, StoreConfig, Storefront};

const HELP: &str = "\
Commands:
  shop | view <id> | back
  image <n> | size <S|M|L|XL> | qty <n> | add
  toggle [id] | remove <id> | cart | checkout
  help | quit";

/// Runs an interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG overrides the default)         │
/// │  2. Load StoreConfig from BLVD_* environment variables                  │
/// │  3. Build the catalog (built-in seeds or BLVD_CATALOG_PATH)             │
/// │  4. Create the session on the catalog screen                            │
/// │  5. Read commands until EOF or `quit`                                   │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = StoreConfig::from_env().context("invalid store configuration")?;
    let catalog = seed::build_catalog(&config).context("failed to load catalog")?;
    info!(
        store = %config.store_name,
        products = catalog.len(),
        "Starting storefront session"
    );

    let mut store = Storefront::new(
        catalog,
        CartStore::with_max_quantity(config.max_item_quantity),
        LoggingCheckout::default(),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", render::render(&store, &config))?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                writeln!(stdout, "{}", HELP)?;
                continue;
            }
            _ => {}
        }

        let outcome = input
            .parse::<Command>()
            .and_then(|command| commands::execute(&mut store, command));
        if let Err(err) = outcome {
            writeln!(stdout, "! {}", Notice::from(&err))?;
        }
        writeln!(stdout, "{}", render::render(&store, &config))?;
        stdout.flush()?;
    }

    info!(items = store.cart().len(), "Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show command traces
/// - `RUST_LOG=blvd_storefront=trace` - Trace this crate only
/// - Default: warnings, plus info for the storefront
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,blvd_storefront=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
