// admintool/src/seed/logic.rs
use anyhow::{Context, Result};
use chrono::Local;
use sqlx::postgres::PgPoolOptions;

use crate::config::SeedConfig;
use crate::restore::verification::verify_admin_state;
use crate::utils::setting::check_db_connection;
use crate::utils::users::{
    fetch_user_by_email, hash_password, insert_admin_user, print_user_summary, promote_to_admin,
};

/// Ensures the admin account exists: promotes it when present, creates it
/// with a hashed default password when missing.
pub async fn perform_seed_orchestration(seed_config: &SeedConfig) -> Result<()> {
    println!(
        "🚀 Starting admin seed at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("🔍 Checking user: {}", seed_config.admin_email);

    if !check_db_connection(&seed_config.database_url).await {
        anyhow::bail!("Cannot proceed with seed - database connection failed");
    }

    let db_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&seed_config.database_url)
        .await
        .context("Failed to open connection pool to target database")?;

    match fetch_user_by_email(&db_pool, &seed_config.admin_email).await? {
        Some(user) if user.is_admin() => {
            print_user_summary("Current user status", &user);
            println!("\nℹ️ User {} is already an admin.", seed_config.admin_email);
        }
        Some(user) => {
            print_user_summary("Current user status", &user);
            println!("\n🔄 Promoting existing user to admin...");
            promote_to_admin(&db_pool, &seed_config.admin_email).await?;

            let verified = verify_admin_state(&db_pool, &seed_config.admin_email).await?;
            print_user_summary("Verification", &verified);
            println!("\n✅ User {} promoted to admin.", seed_config.admin_email);
        }
        None => {
            println!("👤 User {} not found. Creating admin account...", seed_config.admin_email);

            let password_hash = hash_password(&seed_config.default_password)
                .context("Failed to hash the admin password")?;
            let created = insert_admin_user(
                &db_pool,
                &seed_config.admin_email,
                &password_hash,
                seed_config.first_name.as_deref(),
                seed_config.last_name.as_deref(),
            )
            .await
            .context("Failed to insert the admin account")?;

            print_user_summary("Created admin account", &created);
            println!("\n✅ Admin account created: {}", seed_config.admin_email);
            if seed_config.password_is_fallback {
                println!("🔑 Temporary password: {}", seed_config.default_password);
                println!("⚠️ Change this password after the first login.");
            }
        }
    }

    Ok(())
}
