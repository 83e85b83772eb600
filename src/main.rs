//! Admin Account Maintenance Tool
//!
//! Provides a CLI interface for restoring, seeding and checking the
//! application's admin account

// admintool/src/main.rs
mod utils;
mod restore;
mod seed; // Added seed module
mod check; // Added check module
mod config;
mod errors;

use anyhow::{Context, Result};
use config::{
    AppConfig, OperationConfig, load_check_config_from_json, load_restore_config_from_json,
    load_seed_config_from_json,
};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// Main entry point for the admin maintenance tool
#[tokio::main]
async fn main() -> ExitCode {
    match run_app().await {
        Ok(_) => {
            println!("✅ Operation completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_app() -> Result<()> {
    // Pick up DATABASE_URL / ADMIN_EMAIL from a local .env if one exists.
    dotenv::dotenv().ok();

    // Define the path to config.json. Expects it in the same directory as the executable
    // or the project root if running with `cargo run`.
    let config_path = PathBuf::from("config.json");
    let mut app_config = AppConfig::load_from_json(&config_path)
        .context(format!("Failed to load application configuration from {}", config_path.display()))?;

    let args: Vec<String> = env::args().collect();
    let choice = if args.len() > 1 {
        args[1].trim().to_string()
    } else {
        prompt_choice()?
    };

    match choice.as_str() {
        "1" | "restore" => {
            println!("🚀 Starting Admin Restore Process...");
            let restore_config = load_restore_config_from_json(&app_config.raw_json_config)
                .context("Failed to load restore configuration")?;
            app_config.operation = Some(OperationConfig::Restore(restore_config));
            restore::run_restore_flow(&app_config).await
                .context("Restore process failed")?;
        }
        "2" | "seed" => {
            println!("🌱 Starting Admin Seed Process...");
            let seed_config = load_seed_config_from_json(&app_config.raw_json_config)
                .context("Failed to load seed configuration")?;
            app_config.operation = Some(OperationConfig::Seed(seed_config));
            seed::run_seed_flow(&app_config).await
                .context("Seed process failed")?;
        }
        "3" | "check" => {
            println!("🔎 Starting Admin Status Check...");
            let check_config = load_check_config_from_json(&app_config.raw_json_config)
                .context("Failed to load check configuration")?;
            app_config.operation = Some(OperationConfig::Check(check_config));
            check::run_check_flow(&app_config).await
                .context("Check process failed")?;
        }
        _ => {
            println!("❌ Invalid choice. Please enter '1' (restore), '2' (seed), or '3' (check).");
            anyhow::bail!("Invalid operation choice");
        }
    }
    Ok(())
}

/// Prompts user to select an operation
///
/// Returns the user's choice as String
fn prompt_choice() -> Result<String> {
    use std::io::{stdin, stdout, Write};

    println!("Select an operation:");
    println!("1. Restore Admin Access (or type 'restore')");
    println!("2. Seed Admin Account (or type 'seed')");
    println!("3. Check Admin Status (or type 'check')");
    print!("Enter your choice: ");
    let _ = stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    stdin().read_line(&mut input).context("Failed to read user input")?;
    Ok(input.trim().to_string())
}
