//! CLI administration tool for the dispatch service.
//!
//! Operates directly on the PostgreSQL database without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List drivers
//! cargo run --bin admin -- drivers list
//!
//! # Delete a driver
//! cargo run --bin admin -- drivers delete 42
//!
//! # Send a notification
//! cargo run --bin admin -- notify --user dispatcher-1 --title "Shift" --message "Starts at 8"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use dispatch_service::application::services::{DriverService, NotificationService};
use dispatch_service::domain::entities::{DriverStatus, NewNotification};
use dispatch_service::infrastructure::persistence::{PgDriverRepository, PgNotificationRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the dispatch service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage drivers
    Drivers {
        #[command(subcommand)]
        action: DriverAction,
    },

    /// Send a notification to a user
    Notify {
        /// Recipient user id
        #[arg(short, long)]
        user: String,

        /// Notification title
        #[arg(short, long)]
        title: Option<String>,

        /// Notification body
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DriverAction {
    /// List all drivers
    List,

    /// Delete a driver by id
    Delete {
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Drivers { action } => handle_driver_action(action, &pool).await?,
        Commands::Notify {
            user,
            title,
            message,
        } => send_notification(&pool, user, title, message).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_driver_action(action: DriverAction, pool: &PgPool) -> Result<()> {
    let service = DriverService::new(Arc::new(PgDriverRepository::new(Arc::new(pool.clone()))));

    match action {
        DriverAction::List => list_drivers(&service).await,
        DriverAction::Delete { id, yes } => delete_driver(&service, &id, yes).await,
    }
}

/// Prints all drivers as a table.
///
/// ```text
/// 🚚 Drivers
///
///   ID  Name                 License         Status      Vehicle
///   ───────────────────────────────────────────────────────────────────
///   1   Ada Lovelace         L-1001          available   Van 12
/// ```
async fn list_drivers(service: &DriverService<PgDriverRepository>) -> Result<()> {
    println!("{}", "🚚 Drivers".bright_blue().bold());
    println!();

    let drivers = service
        .list_drivers()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list drivers: {}", e))?;

    if drivers.is_empty() {
        println!("{}", "  No drivers found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<15} {:<11} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "License".bright_white().bold(),
        "Status".bright_white().bold(),
        "Vehicle".bright_white().bold()
    );
    println!("  {}", "─".repeat(67).bright_black());

    for driver in &drivers {
        let status = match driver.status {
            DriverStatus::Available => driver.status.as_str().green(),
            DriverStatus::OnTrip => driver.status.as_str().yellow(),
            DriverStatus::OffDuty => driver.status.as_str().bright_black(),
        };

        println!(
            "  {:<4} {:<20} {:<15} {:<11} {}",
            driver.id.to_string().bright_black(),
            driver.name.cyan(),
            driver.license_number,
            status,
            driver.vehicle.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!(
        "  Total: {}",
        drivers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a driver after confirmation (default: No).
async fn delete_driver(
    service: &DriverService<PgDriverRepository>,
    id: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete Driver".bright_blue().bold());
    println!();

    let driver = service
        .get_driver(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Driver:  {}", driver.name.cyan());
    println!("  License: {}", driver.license_number);
    println!("  ID:      {}", driver.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this driver?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_driver(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete driver: {}", e))?;

    println!("{}", "✅ Driver deleted".green().bold());
    println!();

    Ok(())
}

/// Sends a notification, prompting for missing title or message.
async fn send_notification(
    pool: &PgPool,
    user: String,
    title: Option<String>,
    message: Option<String>,
) -> Result<()> {
    println!("{}", "📨 Send Notification".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };
    let message = match message {
        Some(m) => m,
        None => Input::new().with_prompt("Message").interact_text()?,
    };

    let service = NotificationService::new(Arc::new(PgNotificationRepository::new(Arc::new(
        pool.clone(),
    ))));

    let notification = service
        .send_notification(NewNotification {
            user_id: user,
            title,
            message,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to send notification: {}", e))?;

    println!(
        "{} #{} to {}",
        "✅ Sent notification".green().bold(),
        notification.id.to_string().bright_white(),
        notification.user_id.cyan()
    );
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let drivers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM drivers")
                .fetch_one(pool)
                .await
                .context("drivers table missing; start the server once to run migrations")?;
            let unread: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE NOT is_read")
                    .fetch_one(pool)
                    .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Drivers:              {}",
                drivers.to_string().bright_green().bold()
            );
            println!(
                "  Unread notifications: {}",
                unread.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}
