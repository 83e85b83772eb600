// admintool/src/check/logic.rs
use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;

use crate::config::CheckConfig;
use crate::errors::AppError;
use crate::utils::setting::check_db_connection;
use crate::utils::users::{fetch_user_by_email, print_user_summary};

/// Looks up the admin account and prints its current state. Performs no
/// writes on any path.
pub async fn perform_check_orchestration(check_config: &CheckConfig) -> Result<()> {
    println!("🔍 Checking user: {}", check_config.admin_email);

    if !check_db_connection(&check_config.database_url).await {
        anyhow::bail!("Cannot proceed with check - database connection failed");
    }

    let db_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&check_config.database_url)
        .await
        .context("Failed to open connection pool to target database")?;

    let user = match fetch_user_by_email(&db_pool, &check_config.admin_email).await? {
        Some(user) => user,
        None => {
            println!("❌ User {} not found!", check_config.admin_email);
            println!("💡 Run the 'seed' operation to create the admin account.");
            return Err(AppError::NotFound(check_config.admin_email.clone()).into());
        }
    };

    print_user_summary("Current user status", &user);

    if user.is_admin() && user.is_active {
        println!("\n✅ Admin account is in good shape. Nothing to do.");
    } else {
        println!("\n⚠️ Admin account needs attention. Run the 'restore' operation to fix it.");
    }

    Ok(())
}
