//! RPC Provider - alloy-rs 0.9 Connection Management
//!
//! Manages the connection to the target chain via alloy-rs. Validates
//! RPC connectivity (and, when configured, the chain id) at startup and
//! exposes a shared signing provider for all on-chain operations.
//!
//! In alloy 0.9, `ProviderBuilder::new().wallet(..).on_http()` returns
//! a complex filler type. We store it as a type-erased `dyn Provider`
//! to keep the API clean across the adapter layer.

use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::config::ChainConfig;

/// Shared signing RPC provider backed by alloy-rs 0.9.
///
/// All chain adapters share a single provider instance to avoid
/// redundant connections. Uses `dyn Provider` for type erasure because
/// alloy 0.9's builder returns a deeply-nested generic filler type that
/// would leak implementation details.
pub struct RpcProvider {
    /// The alloy HTTP provider with wallet filler (type-erased).
    provider: Arc<dyn Provider + Send + Sync>,
    /// Address of the signing account.
    deployer_address: Address,
}

impl RpcProvider {
    /// Connect to the configured RPC endpoint with a signing key.
    ///
    /// The URL comes from `config.toml` (never hardcoded) and the key
    /// from the environment. When `chain_id` is set in config, the
    /// connection is rejected on mismatch so a mainnet deployment can
    /// never accidentally hit a testnet, or vice versa.
    #[instrument(skip_all)]
    pub async fn connect(config: &ChainConfig, signer: PrivateKeySigner) -> Result<Self> {
        let deployer_address = signer.address();
        let wallet = EthereumWallet::from(signer);

        // alloy 0.9: build an HTTP client with a boxed transport so the
        // resulting provider implements `Provider<BoxTransport>` (the
        // default transport of the `dyn Provider` we store below).
        let client = alloy::rpc::client::ClientBuilder::default()
            .http(config.rpc_url.parse().context("Invalid RPC URL")?)
            .boxed();
        let provider = ProviderBuilder::new().wallet(wallet).on_client(client);

        // Wrap in Arc<dyn Provider> for type erasure
        let provider: Arc<dyn Provider + Send + Sync> = Arc::new(provider);

        // Validate connectivity and chain id at startup
        let chain_id = provider
            .get_chain_id()
            .await
            .context("Failed to query chain ID")?;

        if let Some(expected) = config.chain_id {
            if chain_id != expected {
                anyhow::bail!("Expected chain_id={expected}, got {chain_id}");
            }
        }

        info!(chain_id, deployer = %deployer_address, "Connected to RPC");

        Ok(Self {
            provider,
            deployer_address,
        })
    }

    /// Get a shared reference to the alloy provider (type-erased).
    pub fn inner(&self) -> Arc<dyn Provider + Send + Sync> {
        Arc::clone(&self.provider)
    }

    /// Address of the account that signs the deployment transaction.
    pub const fn deployer_address(&self) -> Address {
        self.deployer_address
    }

    /// Check if the RPC connection is healthy via a lightweight call.
    pub async fn is_healthy(&self) -> bool {
        self.provider.get_block_number().await.is_ok()
    }
}
