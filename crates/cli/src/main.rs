//! Luxe CLI - Command-line storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! luxe shop --category Watches --max-price 2500 --sort price-asc
//! luxe search leather
//! luxe product 3
//!
//! # Manage the cart
//! luxe cart add 3 --qty 2
//! luxe cart set-qty 3 1
//! luxe cart remove 3
//! luxe cart
//!
//! # Manage the wishlist
//! luxe wishlist toggle 5
//! luxe wishlist move-to-cart 5
//! ```
//!
//! # Commands
//!
//! - `shop` / `search` / `product` - Catalog browsing
//! - `cart` - Show or change the cart (persisted to `luxe_cart.json`)
//! - `wishlist` - Show or change the wishlist (persisted to `luxe_wishlist.json`)
//!
//! Configuration comes from the environment (see
//! [`luxe_storefront::config`]); `--data-dir` and `--catalog` override it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use luxe_core::ProductId;
use luxe_storefront::{LogFormat, SortBy, StorefrontConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod view;

use commands::Context;

#[derive(Parser)]
#[command(name = "luxe")]
#[command(author, version, about = "Luxe storefront CLI")]
struct Cli {
    /// Directory holding the cart and wishlist records
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Product catalog JSON file
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Shop {
        /// Only show this category (`All` shows everything)
        #[arg(short, long)]
        category: Option<String>,

        /// Maximum price in whole dollars
        #[arg(short, long)]
        max_price: Option<u32>,

        /// Sort order (`featured`, `price-asc`, `price-desc`, `rating`)
        #[arg(short, long, default_value = "featured")]
        sort: SortBy,
    },
    /// Search products by name, category or description
    Search {
        query: String,
    },
    /// Show a product page
    Product {
        id: ProductId,
    },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Show or change the wishlist
    Wishlist {
        #[command(subcommand)]
        action: Option<WishlistAction>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a product
    Add {
        id: ProductId,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product's line
    Remove {
        id: ProductId,
    },
    /// Set a line's quantity (zero or below removes it)
    SetQty {
        id: ProductId,

        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show the wishlist
    Show,
    /// Save or unsave a product
    Toggle {
        id: ProductId,
    },
    /// Add a saved product to the cart
    MoveToCart {
        id: ProductId,
    },
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays clean.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::default());
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: StorefrontConfig) -> luxe_storefront::error::Result<()> {
    let data_dir = cli.data_dir.unwrap_or(config.data_dir);
    let catalog_path = cli.catalog.unwrap_or(config.catalog_path);
    let mut ctx = Context::new(data_dir, catalog_path);

    match cli.command {
        Commands::Shop {
            category,
            max_price,
            sort,
        } => commands::browse::shop(&ctx, category, max_price, sort)?,
        Commands::Search { query } => commands::browse::search(&ctx, &query)?,
        Commands::Product { id } => commands::browse::product(&ctx, id)?,
        Commands::Cart { action } => match action.unwrap_or(CartAction::Show) {
            CartAction::Show => commands::cart::show(&ctx),
            CartAction::Add { id, qty } => commands::cart::add(&mut ctx, id, qty)?,
            CartAction::Remove { id } => commands::cart::remove(&mut ctx, id)?,
            CartAction::SetQty { id, qty } => commands::cart::set_quantity(&mut ctx, id, qty)?,
            CartAction::Clear => commands::cart::clear(&mut ctx)?,
        },
        Commands::Wishlist { action } => match action.unwrap_or(WishlistAction::Show) {
            WishlistAction::Show => commands::wishlist::show(&ctx),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut ctx, id)?,
            WishlistAction::MoveToCart { id } => commands::wishlist::move_to_cart(&mut ctx, id)?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_negative_quantity() {
        let cli = Cli::try_parse_from(["luxe", "cart", "set-qty", "4", "-1"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Cart {
                action: Some(CartAction::SetQty { qty: -1, .. })
            })
        ));
    }

    #[test]
    fn test_parses_sort_order() {
        let cli = Cli::try_parse_from(["luxe", "shop", "--sort", "price-desc"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Shop {
                sort: SortBy::PriceDesc,
                ..
            })
        ));
        assert!(Cli::try_parse_from(["luxe", "shop", "--sort", "cheapest"]).is_err());
    }
}
