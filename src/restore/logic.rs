// admintool/src/restore/logic.rs
use anyhow::{Context, Result};
use chrono::Local;
use sqlx::postgres::PgPoolOptions;

use crate::config::RestoreConfig;
use crate::errors::AppError;
use crate::restore::verification::verify_admin_state;
use crate::utils::setting::check_db_connection;
use crate::utils::users::{fetch_user_by_email, print_user_summary, promote_to_admin};

/// Orchestrates the admin restore flow.
///
/// 1. Preflight connection check against the target database.
/// 2. Looks up the admin account by email.
/// 3. Skips the write if the role is already 'admin' (idempotent no-op).
/// 4. Otherwise promotes the row and re-reads it to confirm the stored state.
pub async fn perform_restore_orchestration(restore_config: &RestoreConfig) -> Result<()> {
    println!(
        "🚀 Starting admin restore at {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("🔍 Checking user: {}", restore_config.admin_email);

    if !check_db_connection(&restore_config.database_url).await {
        anyhow::bail!("Cannot proceed with restore - database connection failed");
    }

    let db_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&restore_config.database_url)
        .await
        .context("Failed to open connection pool to target database")?;

    let user = match fetch_user_by_email(&db_pool, &restore_config.admin_email).await? {
        Some(user) => user,
        None => {
            println!("❌ User {} not found!", restore_config.admin_email);
            println!("💡 The user may need to be created first. Try the 'seed' operation.");
            return Err(AppError::NotFound(restore_config.admin_email.clone()).into());
        }
    };

    print_user_summary("Current user status", &user);

    if user.is_admin() {
        println!("\n✅ User is already an admin. No changes needed.");
        return Ok(());
    }

    println!("\n🔄 Updating user role to admin...");
    let rows_affected = promote_to_admin(&db_pool, &restore_config.admin_email).await?;
    if rows_affected == 0 {
        // The row existed a moment ago; it was deleted out from under us.
        return Err(AppError::NotFound(restore_config.admin_email.clone()).into());
    }

    let verified = verify_admin_state(&db_pool, &restore_config.admin_email).await?;
    print_user_summary("Verification", &verified);

    println!("\n🎉 SUCCESS! Admin permissions restored.");
    println!("You can now log in as admin with: {}", restore_config.admin_email);
    Ok(())
}
