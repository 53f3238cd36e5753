//! CLI administration tool for the shortener.
//!
//! Inspects and removes short links, shows counts and checks the database
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Show where a code points
//! cargo run --bin admin -- link show abc123
//!
//! # Delete a mapping (asks for confirmation)
//! cargo run --bin admin -- link delete abc123
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_HOST`/`DB_USER`/... components): PostgreSQL connection

use shortener::application::ShortenError;
use shortener::application::services::{LinkService, LinkServiceSettings};
use shortener::config::{self, Config};
use shortener::domain::context::OperationContext;
use shortener::infrastructure::persistence::PgUrlRepository;
use shortener::server::connect_pool;
use shortener::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the shortener.
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
    /// Inspect or remove short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// Show the mapping stored for a code
    Show {
        /// Short code (without the domain)
        code: String,
    },

    /// Delete the mapping stored for a code
    Delete {
        /// Short code (without the domain)
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;
    let ctx = OperationContext::generated().with_query_timeout(config.query_timeout());

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, &config, &ctx).await?,
        Commands::Stats => handle_stats(&pool, &ctx, &config.public_domain).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

type AdminLinkService = LinkService<PgUrlRepository, RandomCodeGenerator>;

async fn handle_link_action(
    action: LinkAction,
    pool: &PgPool,
    config: &Config,
    ctx: &OperationContext,
) -> Result<()> {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    match action {
        LinkAction::Show { code } => show_link(&repo, ctx, &code).await?,
        LinkAction::Delete { code, yes } => {
            let service = LinkService::new(
                repo.clone(),
                Arc::new(RandomCodeGenerator::new()),
                LinkServiceSettings {
                    max_attempts: config.max_attempts,
                    public_domain: config.public_domain.clone(),
                },
            );
            delete_link(&repo, &service, ctx, &code, yes).await?
        }
    }

    Ok(())
}

async fn show_link(repo: &PgUrlRepository, ctx: &OperationContext, code: &str) -> Result<()> {
    println!("{}", "🔗 Short Link".bright_blue().bold());
    println!();

    let mapping = repo
        .find_mapping(ctx, code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let Some(mapping) = mapping else {
        println!("{}", format!("  No mapping for '{code}'").yellow());
        return Ok(());
    };

    println!("  ID:      {}", mapping.id.to_string().bright_black());
    println!("  Code:    {}", mapping.short_code.as_str().cyan());
    println!("  Target:  {}", mapping.long_url.bright_white());
    println!(
        "  Created: {}",
        mapping
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Deletes a mapping after showing it.
///
/// Requires confirmation (default: No) unless `--yes` is passed.
async fn delete_link(
    repo: &PgUrlRepository,
    service: &AdminLinkService,
    ctx: &OperationContext,
    code: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑  Delete Short Link".bright_blue().bold());
    println!();

    let mapping = repo
        .find_mapping(ctx, code)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Short link not found")?;

    println!("  Code:   {}", mapping.short_code.as_str().cyan());
    println!("  Target: {}", mapping.long_url.bright_white());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    println!();
    match service.delete(ctx, code).await {
        Ok(()) => println!("{}", "✅ Link deleted".green().bold()),
        Err(ShortenError::NotFound(_)) => {
            println!("{}", "⚠️  Link was already gone".yellow())
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to delete link: {}", e)),
    }
    println!();

    Ok(())
}

async fn handle_stats(
    pool: &PgPool,
    ctx: &OperationContext,
    public_domain: &str,
) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let repo = PgUrlRepository::new(Arc::new(pool.clone()));
    let links_count = repo
        .count(ctx)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("  Domain: {}", public_domain.cyan());
    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
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
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await
                    .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
