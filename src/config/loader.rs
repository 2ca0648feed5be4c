//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::DeployConfig;

/// Load and validate configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<DeployConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: DeployConfig = toml::from_str(&content)
    .with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  info!(
    name = %config.deployer.name,
    contract = %config.contract.name,
    rpc = %config.chain.rpc_url,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty identifiers and paths
/// - A sensible gas ceiling
///
/// The RPC URL itself is parsed by the provider at connect time.
fn validate_config(config: &DeployConfig) -> Result<()> {
  anyhow::ensure!(
    !config.deployer.name.is_empty(),
    "Deployer run name must not be empty"
  );

  anyhow::ensure!(
    !config.chain.rpc_url.is_empty(),
    "Chain RPC URL must not be empty"
  );

  anyhow::ensure!(
    config.chain.max_gas_gwei > 0.0,
    "max_gas_gwei must be positive, got {}",
    config.chain.max_gas_gwei
  );

  anyhow::ensure!(
    !config.contract.name.is_empty(),
    "Contract name must not be empty"
  );
  anyhow::ensure!(
    !config.contract.artifacts_dir.is_empty(),
    "Artifacts directory must not be empty"
  );

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_validate_minimal_config() {
    let config: DeployConfig = toml::from_str(
      r#"
        [deployer]
        name = "mainnet-initial"

        [chain]
        rpc_url = "https://mainnet.infura.io/v3/key"
        chain_id = 1

        [contract]
        artifacts_dir = "build/contracts"
      "#,
    )
    .unwrap();

    assert!(validate_config(&config).is_ok());
    assert_eq!(config.contract.name, "DiamondHands");
    assert_eq!(config.deployer.log_level, "info");
    assert!(!config.deployer.dry_run);
  }

  #[test]
  fn test_validate_rejects_empty_rpc_url() {
    let config: DeployConfig = toml::from_str(
      r#"
        [deployer]
        name = "local"

        [chain]
        rpc_url = ""

        [contract]
        artifacts_dir = "build/contracts"
      "#,
    )
    .unwrap();

    assert!(validate_config(&config).is_err());
  }
}
