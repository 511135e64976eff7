//! CLI administration tool for the CMS API.
//!
//! Provides commands for managing back-office users, issuing access tokens,
//! and inspecting the database schema without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the first user (prompts for missing fields)
//! cargo run --bin admin -- user create
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Issue a bearer token for a user
//! cargo run --bin admin -- token issue admin@example.com
//!
//! # Print, apply or verify the entity schema
//! cargo run --bin admin -- schema print
//! cargo run --bin admin -- schema apply
//! cargo run --bin admin -- schema verify
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required except for `schema print`): PostgreSQL connection string
//! - `APP_SECRET_KEY` (required for `token issue`): JWT signing key

use cms_rest_api::application::services::{AuthService, UserRegistration, UserService};
use cms_rest_api::config::AppSettings;
use cms_rest_api::domain::repositories::AppUserRepository;
use cms_rest_api::infrastructure::persistence::PgAppUserRepository;
use cms_rest_api::mapping::SchemaRegistry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the CMS API.
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
    /// Manage back-office users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Issue access tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Entity schema operations
    Schema {
        #[command(subcommand)]
        action: SchemaAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a user
    Create {
        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(short, long)]
        user_name: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List active users
    List,
}

/// Token subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Issue a bearer token for a user without a password
    Issue {
        /// E-mail address or user name
        login: String,
    },
}

/// Schema subcommands.
#[derive(Subcommand)]
enum SchemaAction {
    /// Print the DDL for every registered entity
    Print,

    /// Create missing tables
    Apply,

    /// Compare live column nullability with the audit contract
    Verify,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Commands::Schema {
        action: SchemaAction::Print,
    } = cli.command
    {
        return print_schema();
    }

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Schema { action } => handle_schema_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn user_repository(pool: &PgPool) -> Arc<PgAppUserRepository> {
    Arc::new(PgAppUserRepository::new(Arc::new(pool.clone())))
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = user_repository(pool);

    match action {
        UserAction::Create {
            first_name,
            last_name,
            user_name,
            email,
            yes,
        } => {
            let registration = prompt_registration(first_name, last_name, user_name, email)?;
            create_user(repo, registration, yes).await?;
        }
        UserAction::List => list_users(repo).await?,
    }

    Ok(())
}

/// Fills in missing user fields interactively. The password is always prompted.
fn prompt_registration(
    first_name: Option<String>,
    last_name: Option<String>,
    user_name: Option<String>,
    email: Option<String>,
) -> Result<UserRegistration> {
    let prompt = |value: Option<String>, label: &str| -> Result<String> {
        match value {
            Some(v) => Ok(v),
            None => Ok(Input::<String>::new().with_prompt(label).interact_text()?),
        }
    };

    let first_name = prompt(first_name, "First name")?;
    let last_name = prompt(last_name, "Last name")?;
    let user_name = prompt(user_name, "User name")?;
    let email = prompt(email, "E-mail")?;

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .validate_with(|p: &String| -> Result<(), &str> {
            if p.len() >= 8 {
                Ok(())
            } else {
                Err("Password must be at least 8 characters")
            }
        })
        .interact()?;

    Ok(UserRegistration {
        first_name,
        last_name,
        user_name,
        email,
        password,
        image_path: None,
    })
}

/// Creates a user after confirmation.
///
/// # Flow
///
/// 1. Collect fields (flags or prompts)
/// 2. Display details
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Hash password and store through [`UserService`]
async fn create_user(
    repo: Arc<PgAppUserRepository>,
    registration: UserRegistration,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();
    println!("{}", "User details:".bright_white().bold());
    println!(
        "  Name:      {} {}",
        registration.first_name.cyan(),
        registration.last_name.cyan()
    );
    println!("  User name: {}", registration.user_name.cyan());
    println!("  E-mail:    {}", registration.email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = UserService::new(repo);
    let user = service
        .create(registration)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();
    println!(
        "  Sign in with: {} -d '{{\"login\":\"{}\",\"password\":\"...\"}}' http://localhost:3000/api/auth/login",
        "curl -X POST -H 'Content-Type: application/json'".bright_cyan(),
        user.email
    );
    println!();

    Ok(())
}

/// Lists active users.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  User name            E-mail                         Created
///   ──────────────────────────────────────────────────────────────────────────
///   1   admin                admin@example.com              2026-01-15 10:30
/// ```
async fn list_users(repo: Arc<PgAppUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list(0, 1000)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<30} {:<16}",
        "ID".bright_white().bold(),
        "User name".bright_white().bold(),
        "E-mail".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &users {
        println!(
            "  {:<3} {:<20} {:<30} {}",
            user.id.to_string().bright_black(),
            user.user_name.cyan(),
            user.email,
            user.audit
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Issues a token for an existing user. Useful for scripting and smoke tests.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let TokenAction::Issue { login } = action;

    let settings = AppSettings::from_env()?;
    settings.validate()?;

    let repo = user_repository(pool);

    let user = match repo
        .find_by_email(&login)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    {
        Some(user) => Some(user),
        None => repo
            .find_by_user_name(&login)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };
    let user = user.context("User not found")?;

    let auth = AuthService::new(repo, settings);
    let issued = auth
        .issue_token(&user)
        .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))?;

    println!("{}", "🔑 Access token".bright_blue().bold());
    println!();
    println!("  User:    {}", user.user_name.cyan());
    println!(
        "  Expires: {}",
        issued
            .expires_at
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
            .bright_black()
    );
    println!();
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        issued.token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Prints the DDL without touching the database.
fn print_schema() -> Result<()> {
    let registry = SchemaRegistry::cms().context("Invalid entity schema")?;

    for statement in registry.to_ddl() {
        println!("{statement};");
        println!();
    }

    Ok(())
}

/// Handles schema commands that need a connection.
async fn handle_schema_action(action: SchemaAction, pool: &PgPool) -> Result<()> {
    let registry = SchemaRegistry::cms().context("Invalid entity schema")?;

    match action {
        SchemaAction::Print => print_schema()?,
        SchemaAction::Apply => {
            println!("{}", "🛠  Applying entity schema...".bright_blue());

            registry.apply(pool).await?;

            println!(
                "{} ({} tables)",
                "✅ Schema applied".green().bold(),
                registry.tables().len()
            );
        }
        SchemaAction::Verify => {
            println!("{}", "🔍 Verifying audit columns...".bright_blue());

            let violations = registry.verify_database(pool).await?;

            if violations.is_empty() {
                println!("{}", "✅ All tables satisfy the audit contract".green().bold());
            } else {
                for violation in &violations {
                    println!("  {} {}", "✗".red(), violation);
                }
                anyhow::bail!("{} audit column violation(s)", violations.len());
            }
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
    }

    Ok(())
}
