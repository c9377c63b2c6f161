//! CLI administration tool for url-shortener.
//!
//! Lists, adds and deletes URL mappings and checks the store without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List stored mappings
//! cargo run --bin admin -- urls list --limit 20
//!
//! # Add a mapping (alias generated when omitted)
//! cargo run --bin admin -- urls add https://example.com/page --alias ab12Cd
//!
//! # Delete a mapping
//! cargo run --bin admin -- urls delete ab12Cd
//!
//! # Check the store
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH` (required): SQLite database file
//! - `ALIAS_LENGTH` (optional): generated alias length, default 6

use url_shortener::api::dto::save::SaveRequest;
use url_shortener::application::services::UrlService;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::SqliteUrlRepository;
use url_shortener::utils::alias::{DEFAULT_ALIAS_LENGTH, MAX_ALIAS_LENGTH, RandomAliasGenerator};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use validator::Validate;

type AdminUrlService = UrlService<SqliteUrlRepository, RandomAliasGenerator>;

/// CLI tool for managing url-shortener.
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
    /// Manage URL mappings
    Urls {
        #[command(subcommand)]
        action: UrlsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL mapping subcommands.
#[derive(Subcommand)]
enum UrlsAction {
    /// List stored mappings
    List {
        /// Maximum number of rows
        #[arg(short, long, default_value_t = 50)]
        limit: i64,

        /// Number of rows to skip
        #[arg(short, long, default_value_t = 0)]
        offset: i64,
    },

    /// Add a mapping
    Add {
        /// Long URL to shorten
        url: String,

        /// Alias to use (generated if not provided)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Delete a mapping
    Delete {
        /// Alias to delete
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open the store, create the schema and count mappings
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage_path = std::env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

    let repo = SqliteUrlRepository::connect(&storage_path, 1)
        .await
        .with_context(|| format!("Failed to open store at {}", storage_path))?;

    match cli.command {
        Commands::Urls { action } => handle_urls_action(action, repo).await?,
        Commands::Db { action } => handle_db_action(action, &repo, &storage_path).await?,
    }

    Ok(())
}

/// Dispatches URL mapping commands.
async fn handle_urls_action(action: UrlsAction, repo: SqliteUrlRepository) -> Result<()> {
    match action {
        UrlsAction::List { limit, offset } => list_urls(&repo, limit, offset).await?,
        UrlsAction::Add { url, alias } => {
            let service = build_service(repo)?;
            add_url(&service, url, alias).await?;
        }
        UrlsAction::Delete { alias, yes } => {
            let service = build_service(repo)?;
            delete_url(&service, alias, yes).await?;
        }
    }

    Ok(())
}

fn build_service(repo: SqliteUrlRepository) -> Result<AdminUrlService> {
    let alias_length = match std::env::var("ALIAS_LENGTH") {
        Ok(value) => value
            .trim()
            .parse::<usize>()
            .with_context(|| format!("ALIAS_LENGTH has an invalid value: '{}'", value))?,
        Err(_) => DEFAULT_ALIAS_LENGTH,
    };

    if alias_length == 0 || alias_length > MAX_ALIAS_LENGTH {
        anyhow::bail!(
            "ALIAS_LENGTH must be between 1 and {}, got {}",
            MAX_ALIAS_LENGTH,
            alias_length
        );
    }

    Ok(UrlService::new(
        Arc::new(repo),
        Arc::new(RandomAliasGenerator::from_os_rng()),
        alias_length,
    ))
}

/// Lists stored mappings ordered by id.
///
/// # Output Format
///
/// ```text
/// 📋 URL mappings
///
///   ID    Alias        URL
///   ──────────────────────────────────────────────
///   1     ab12Cd       https://example.com/page
/// ```
async fn list_urls(repo: &SqliteUrlRepository, limit: i64, offset: i64) -> Result<()> {
    println!("{}", "📋 URL mappings".bright_blue().bold());
    println!();

    let mappings = repo
        .list(limit, offset)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Add one with: {} admin urls add <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<12} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<5} {:<12} {}",
            mapping.id.to_string().bright_black(),
            mapping.alias.cyan(),
            mapping.url
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        mappings.len().to_string().bright_white().bold(),
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Adds a mapping with the same rules as `POST /url`.
async fn add_url(service: &AdminUrlService, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "🔗 Add URL".bright_blue().bold());
    println!();

    let request = SaveRequest {
        url: Some(url),
        alias,
    };

    request
        .validate()
        .map_err(|_| anyhow::anyhow!("field URL is not a valid URL"))?;

    if !request.url_is_header_safe() {
        anyhow::bail!("field URL is not a valid URL");
    }

    let url = request.url.as_deref().unwrap_or_default();
    let alias = service
        .save(url, request.supplied_alias())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add URL: {}", e))?;

    println!("{}", "✅ URL added".green().bold());
    println!("  Alias: {}", alias.bright_yellow().bold());
    println!("  URL:   {}", url.cyan());
    println!();

    Ok(())
}

/// Deletes a mapping after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes` is given
/// - Shows the target URL before asking
async fn delete_url(service: &AdminUrlService, alias: String, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete URL".bright_blue().bold());
    println!();

    let url = service
        .resolve(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("Cannot delete '{}': {}", alias, e))?;

    println!("  Alias: {}", alias.cyan());
    println!("  URL:   {}", url.bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(&alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete URL: {}", e))?;

    println!("{}", "✅ URL deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(
    action: DbAction,
    repo: &SqliteUrlRepository,
    storage_path: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking store...".bright_blue());

            sqlx::query("SELECT 1").execute(repo.pool()).await?;

            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count mappings: {}", e))?;

            println!("{}", "✅ Store OK".green().bold());
            println!("  Path:     {}", storage_path.bright_white());
            println!("  Mappings: {}", count.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
