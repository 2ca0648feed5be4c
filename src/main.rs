//! DiamondHands Deployer — Entry Point
//!
//! One-shot tool that deploys the DiamondHands contract with the list
//! of supported Uniswap router addresses as its constructor argument.
//!
//! Wiring sequence:
//! 1. Load .env + config.toml + validate
//! 2. Init tracing (JSON structured logging)
//! 3. Read SUPPORTED_UNISWAP_ROUTERS and DEPLOYER_PRIVATE_KEY from env
//! 4. Connect the signing RPC provider (chain-id validated)
//! 5. Wire GasOracle + ChainDeployer (ContractDeployer port)
//! 6. Run the DeploymentInvoker once and report the outcome
//!
//! Dry-run mode (`deployer.dry_run = true`) performs every step except
//! submitting the transaction, so config, key, RPC endpoint and router
//! list can all be verified without spending gas.

use std::sync::Arc;

use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use tracing::info;

use diamond_hands_deployer::adapters::chain::{ChainDeployer, GasOracle, RpcProvider};
use diamond_hands_deployer::config::{self, PRIVATE_KEY_ENV, ROUTERS_ENV};
use diamond_hands_deployer::usecases::invoker::DeploymentInvoker;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Load .env (local runs) and config.toml ───────────
    dotenvy::dotenv().ok();

    let config = config::loader::load_config("config.toml")
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.deployer.log_level)
                }),
        )
        .json()
        .init();

    info!(
        name = %config.deployer.name,
        version = env!("CARGO_PKG_VERSION"),
        dry_run = config.deployer.dry_run,
        contract = %config.contract.name,
        "Starting DiamondHands deployer"
    );

    // ── 3. Read the router list and signing key from env ────
    let raw_routers = std::env::var(ROUTERS_ENV)
        .with_context(|| format!("{ROUTERS_ENV} not set"))?;

    let signer: PrivateKeySigner = std::env::var(PRIVATE_KEY_ENV)
        .with_context(|| format!("{PRIVATE_KEY_ENV} not set"))?
        .parse()
        .with_context(|| format!("{PRIVATE_KEY_ENV} is not a valid private key"))?;

    // ── 4. Connect the signing RPC provider ─────────────────
    let provider = Arc::new(
        RpcProvider::connect(&config.chain, signer)
            .await
            .context("Failed to connect RPC provider")?,
    );

    // ── 5. Wire the deployment port ─────────────────────────
    let gas_oracle = Arc::new(GasOracle::new(
        Arc::clone(&provider),
        config.chain.max_gas_gwei,
    ));
    let deployer = Arc::new(ChainDeployer::new(
        Arc::clone(&provider),
        gas_oracle,
        config.contract.artifacts_dir.clone(),
    ));

    // ── 6. Run the single deployment ────────────────────────
    let invoker = DeploymentInvoker::new(deployer, &config);

    match invoker.run(&raw_routers).await? {
        Some(outcome) => {
            info!(
                address = %outcome.contract_address,
                tx_hash = %outcome.tx_hash,
                gas_used = outcome.gas_used,
                "Deployment complete"
            );
        }
        None => {
            info!("Dry run complete — nothing submitted");
        }
    }

    Ok(())
}
