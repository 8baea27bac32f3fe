//! CLI administration tool for shorturls.
//!
//! Inspects short codes and stored links without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Codec and normalization (no database needed)
//! cargo run --bin admin -- encode 250
//! cargo run --bin admin -- decode ec
//! cargo run --bin admin -- normalize www.something.com
//!
//! # Stored links (PostgreSQL)
//! cargo run --bin admin -- shorten https://example.com
//! cargo run --bin admin -- lookup ec
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Database commands read the same variables as the server
//! (`DATABASE_URL` or `DB_*`), see [`shorturls::config`].

use shorturls::application::services::LinkService;
use shorturls::config::{self, Config};
use shorturls::infrastructure::persistence::PgLinkRepository;
use shorturls::server;
use shorturls::utils::codec;
use shorturls::utils::url_normalizer::normalize_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturls.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Print the short code for a record id
    Encode {
        /// Record id
        id: u64,
    },

    /// Print the record id a short code refers to
    Decode {
        /// Short code
        code: String,
    },

    /// Print the canonical form a URL would be stored as
    Normalize {
        /// URL to normalize
        url: String,
    },

    /// Store a URL and print its short code
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// Show the URL stored for a short code
    Lookup {
        /// Short code
        code: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { id } => {
            println!("{}", codec::encode(id).bright_yellow().bold());
        }
        Commands::Decode { code } => {
            let id = codec::decode(&code).with_context(|| format!("Invalid short code '{code}'"))?;
            println!("{}", id.to_string().bright_yellow().bold());
        }
        Commands::Normalize { url } => match normalize_url(&url) {
            Ok(normalized) => println!("{}", normalized.green()),
            Err(e) => {
                println!("{} {}", "Rejected:".red().bold(), e);
                std::process::exit(1);
            }
        },
        Commands::Shorten { url } => {
            let service = link_service(&connect().await?);
            let record = service
                .shorten(&url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

            println!("{}", "✅ Link stored".green().bold());
            println!("  Id:   {}", record.id.to_string().cyan());
            println!("  URL:  {}", record.real_url.bright_white());
            println!("  Code: {}", record.code().bright_yellow().bold());
        }
        Commands::Lookup { code } => {
            let service = link_service(&connect().await?);
            match service.resolve(&code).await {
                Ok(record) => {
                    println!("  Id:  {}", record.id.to_string().cyan());
                    println!("  URL: {}", record.real_url.bright_white());
                }
                Err(e) => {
                    println!("{} {}", "❌".red(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

/// Connects to PostgreSQL using the server configuration.
async fn connect() -> Result<PgPool> {
    let config = config::load_from_env()?;
    let database_url = database_url(&config)?;

    server::connect_pool(&config, database_url).await
}

fn database_url(config: &Config) -> Result<&str> {
    config
        .database_url
        .as_deref()
        .context("Database commands require STORAGE_BACKEND=postgres")
}

fn link_service(pool: &PgPool) -> LinkService<PgLinkRepository> {
    LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
}

/// Displays the number of stored links and the code of the newest one.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = link_service(pool)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let last_id: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM shortened_urls")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:       {}",
        links_count.to_string().bright_green().bold()
    );
    if let Some(id) = last_id {
        let code = codec::encode(u64::try_from(id).unwrap_or_default());
        println!("  Newest code: {}", code.bright_green().bold());
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            server::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
