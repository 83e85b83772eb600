pub(crate) mod logic;
pub(crate) mod verification; // Post-update re-read, do not trust the UPDATE row count

use anyhow::Result;
use crate::config::AppConfig;

/// Public entry point for the admin restore process.
pub async fn run_restore_flow(app_config: &AppConfig) -> Result<()> {
    let restore_config = match &app_config.operation {
        Some(crate::config::OperationConfig::Restore(cfg)) => cfg,
        _ => anyhow::bail!("Restore operation selected but no restore configuration found."),
    };

    logic::perform_restore_orchestration(restore_config).await
}
