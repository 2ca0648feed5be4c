//! Configuration Module - TOML-based Deployment Configuration
//!
//! Loads and validates configuration from `config.toml` with secrets
//! supplied via `.env` / environment variables. The RPC endpoint, the
//! target contract and the artifact location are all externalized here -
//! nothing is hardcoded in the domain layer. The router list itself
//! arrives through the `SUPPORTED_UNISWAP_ROUTERS` environment variable
//! and never through the TOML file.

pub mod loader;

use serde::Deserialize;

/// Environment variable carrying the comma-separated router list.
pub const ROUTERS_ENV: &str = "SUPPORTED_UNISWAP_ROUTERS";

/// Environment variable carrying the deployer's private key.
pub const PRIVATE_KEY_ENV: &str = "DEPLOYER_PRIVATE_KEY";

/// Top-level deployment configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before any chain interaction happens.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployConfig {
  /// Tool identity and run mode.
  pub deployer: DeployerConfig,
  /// Chain endpoint and transaction limits.
  pub chain: ChainConfig,
  /// Target contract and artifact location.
  pub contract: ContractConfig,
}

/// Tool identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployerConfig {
  /// Human-readable run name (e.g. "mainnet-2023-01").
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Dry-run mode: parse and log the deployment request, submit nothing.
  #[serde(default)]
  pub dry_run: bool,
}

/// Chain endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
  /// JSON-RPC endpoint URL.
  pub rpc_url: String,
  /// Expected chain id; the connection is rejected on mismatch.
  /// Leave unset to skip the check (local devnets).
  pub chain_id: Option<u64>,
  /// Refuse to submit while the gas price is above this many gwei.
  #[serde(default = "default_max_gas_gwei")]
  pub max_gas_gwei: f64,
}

/// Target contract configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
  /// Contract identifier; also the artifact file stem.
  #[serde(default = "default_contract_name")]
  pub name: String,
  /// Directory holding compiled contract artifacts (JSON).
  pub artifacts_dir: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_max_gas_gwei() -> f64 {
  100.0
}

fn default_contract_name() -> String {
  "DiamondHands".to_string()
}
