// admintool/src/check/mod.rs
pub(crate) mod logic;

use anyhow::Result;
use crate::config::AppConfig;

/// Public entry point for the read-only status check.
pub async fn run_check_flow(app_config: &AppConfig) -> Result<()> {
    let check_config = match &app_config.operation {
        Some(crate::config::OperationConfig::Check(cfg)) => cfg,
        _ => anyhow::bail!("Check operation selected but no check configuration found."),
    };

    logic::perform_check_orchestration(check_config).await
}
