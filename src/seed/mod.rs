// admintool/src/seed/mod.rs
pub(crate) mod logic;

use anyhow::Result;
use crate::config::AppConfig;

/// Public entry point for the seed process.
pub async fn run_seed_flow(app_config: &AppConfig) -> Result<()> {
    let seed_config = match &app_config.operation {
        Some(crate::config::OperationConfig::Seed(cfg)) => cfg,
        _ => anyhow::bail!("Seed operation selected but no seed configuration found."),
    };

    logic::perform_seed_orchestration(seed_config).await
}
