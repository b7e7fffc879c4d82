//! CLI administration tool for kv-url-shortener.
//!
//! Manages items directly in the configured Redis store, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List the items of a host
//! cargo run --bin admin -- items list --host s.example.com
//!
//! # Create or replace an item
//! cargo run --bin admin -- items put docs https://docs.example.com --host s.example.com
//!
//! # Disable, re-enable, or permanently delete
//! cargo run --bin admin -- items disable docs --host s.example.com
//! cargo run --bin admin -- items enable docs --host s.example.com
//! cargo run --bin admin -- items delete docs --host s.example.com
//!
//! # Hash an API key to match audit entries
//! cargo run --bin admin -- key hash my-secret-key
//!
//! # Check the store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/`REDIS_PASSWORD`/`REDIS_DB` (required)
//! - `KV_KEY_PREFIX` (optional, default `items:`)

use kv_url_shortener::application::services::{ItemService, hash_api_key};
use kv_url_shortener::config::{Config, mask_connection_string};
use kv_url_shortener::domain::entities::{Item, ItemPatch, ReplaceItem};
use kv_url_shortener::domain::repositories::ItemRepository;
use kv_url_shortener::infrastructure::persistence::RedisItemRepository;
use kv_url_shortener::utils::extract_host::normalize_host;
use kv_url_shortener::utils::http_url::validate_http_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing kv-url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage items of a host
    Items {
        /// Host whose key space to operate on (e.g. "s.example.com"); port and
        /// case are ignored as in the `Host` header
        #[arg(long, global = true, default_value = "localhost", value_parser = parse_host)]
        host: String,

        #[command(subcommand)]
        action: ItemAction,
    },

    /// API key helpers
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Item management subcommands.
#[derive(Subcommand)]
enum ItemAction {
    /// List all items
    List,

    /// Show one item
    Get { param: String },

    /// Create or replace an item
    Put {
        param: String,

        /// Destination URL (http or https)
        url: String,

        #[arg(short, long)]
        description: Option<String>,

        /// Initial hit count (defaults to the stored count, or 0)
        #[arg(short, long)]
        count: Option<u64>,
    },

    /// Stop redirecting, keeping the record
    Disable { param: String },

    /// Resume redirecting a disabled item
    Enable { param: String },

    /// Remove an item permanently
    Delete {
        param: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// API key subcommands.
#[derive(Subcommand)]
enum KeyAction {
    /// Print the SHA-256 of a key, as shown in audit entries
    Hash { key: String },
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check the Redis connection
    Check,
}

/// Normalizes `--host` the way the server normalizes the `Host` header.
fn parse_host(raw: &str) -> std::result::Result<String, String> {
    normalize_host(raw).ok_or_else(|| format!("invalid host '{raw}'"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Items { host, action } => {
            let repo = connect(&Config::from_env()?).await?;
            let service = ItemService::new(repo as Arc<dyn ItemRepository>);
            handle_item_action(action, &service, &host).await?
        }
        Commands::Key { action } => match action {
            KeyAction::Hash { key } => println!("{}", hash_api_key(Some(&key))),
        },
        Commands::Store { action } => handle_store_action(action, &Config::from_env()?).await?,
    }

    Ok(())
}

async fn connect(config: &Config) -> Result<Arc<RedisItemRepository>> {
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_HOST must be set")?;

    let repo = RedisItemRepository::connect(redis_url, &config.kv_key_prefix)
        .await
        .context("Failed to connect to Redis")?;

    Ok(Arc::new(repo))
}

/// Dispatches item management commands.
async fn handle_item_action(
    action: ItemAction,
    service: &ItemService<dyn ItemRepository>,
    host: &str,
) -> Result<()> {
    match action {
        ItemAction::List => list_items(service, host).await?,
        ItemAction::Get { param } => {
            let item = find(service, host, &param).await?;
            print_item(&item);
        }
        ItemAction::Put {
            param,
            url,
            description,
            count,
        } => {
            validate_http_url(&url)
                .map_err(|_| anyhow::anyhow!("URL must be an absolute http(s) URL"))?;

            let item = service
                .create_or_replace(
                    host,
                    &param,
                    ReplaceItem {
                        description,
                        url,
                        count,
                    },
                )
                .await
                .map_err(|e| anyhow::anyhow!("Failed to save item: {}", e))?;

            println!("{}", "✅ Item saved".green().bold());
            print_item(&item);
        }
        ItemAction::Disable { param } => {
            let item = find(service, host, &param).await?;
            let item = service
                .disable(host, &item)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to disable item: {}", e))?;

            println!("{}", "🔒 Item disabled".yellow().bold());
            print_item(&item);
        }
        ItemAction::Enable { param } => {
            let item = find(service, host, &param).await?;
            let patch = ItemPatch {
                unavailable: Some(false),
                ..Default::default()
            };
            let item = service
                .update(host, &item, patch)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to enable item: {}", e))?;

            println!("{}", "✅ Item enabled".green().bold());
            print_item(&item);
        }
        ItemAction::Delete { param, yes } => delete_item(service, host, &param, yes).await?,
    }

    Ok(())
}

async fn find(service: &ItemService<dyn ItemRepository>, host: &str, param: &str) -> Result<Item> {
    service
        .find(host, param)
        .await
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))?
        .with_context(|| format!("Item '{}' not found on {}", param, host))
}

/// Lists all items of a host.
///
/// # Output Format
///
/// ```text
/// 📋 Items on s.example.com
///
///   Param            Count    Status     URL
///   ──────────────────────────────────────────────────────────────
///   docs             12       ACTIVE     https://docs.example.com
///   old              3        DISABLED   https://old.example.com
/// ```
async fn list_items(service: &ItemService<dyn ItemRepository>, host: &str) -> Result<()> {
    println!("{} {}", "📋 Items on".bright_blue().bold(), host.cyan().bold());
    println!();

    let items = service
        .find_all(host)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list items: {}", e))?;

    if items.is_empty() {
        println!("{}", "  No items found".yellow());
        return Ok(());
    }

    println!(
        "  {:<16} {:<8} {:<10} {}",
        "Param".bright_white().bold(),
        "Count".bright_white().bold(),
        "Status".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for item in &items {
        println!(
            "  {:<16} {:<8} {:<10} {}",
            item.param().cyan(),
            item.count().to_string().bright_black(),
            status_label(item),
            item.raw_url()
        );
    }

    println!();
    println!("  Total: {}", items.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Permanently deletes an item after confirmation (default: No).
async fn delete_item(
    service: &ItemService<dyn ItemRepository>,
    host: &str,
    param: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete Item".bright_blue().bold());
    println!();

    let item = find(service, host, param).await?;
    print_item(&item);

    println!(
        "{}",
        "⚠️  This removes the record for good. Use `disable` to keep it."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this item permanently?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(host, &item)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete item: {}", e))?;

    println!("{}", "✅ Item deleted".green().bold());

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_store_action(action: StoreAction, config: &Config) -> Result<()> {
    match action {
        StoreAction::Check => {
            let Some(redis_url) = config.redis_url.as_deref() else {
                println!("{}", "⚠️  No Redis configured; the server uses the in-memory store".yellow());
                return Ok(());
            };

            println!(
                "{} {}",
                "🔍 Checking".bright_blue(),
                mask_connection_string(redis_url).bright_white()
            );

            let repo = connect(config).await?;
            if !repo.ping().await {
                anyhow::bail!("Redis did not answer PING");
            }

            println!("{}", "✅ Store connection OK".green().bold());
        }
    }

    Ok(())
}

fn status_label(item: &Item) -> ColoredString {
    if item.is_unavailable() {
        "DISABLED".red()
    } else {
        "ACTIVE".green()
    }
}

fn print_item(item: &Item) {
    println!();
    println!("  Param:       {}", item.param().cyan());
    println!("  URL:         {}", item.raw_url().bright_white());
    if let Some(description) = item.description() {
        println!("  Description: {}", description);
    }
    println!("  Count:       {}", item.count().to_string().bright_green());
    println!("  Status:      {}", status_label(item));
    println!();
}
