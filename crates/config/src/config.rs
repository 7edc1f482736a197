use std::{fs, path::Path};

use rooch_btc_types::{BitcoinNetwork, DEFAULT_BITCOIN_NETWORK};
use rooch_crypto::SignWith;
use rooch_tx_types::DEFAULT_MAX_GAS_AMOUNT;
use serde::{Deserialize, Serialize};
use tracing::*;

use crate::{errors::ConfigError, network::RoochNetwork};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Network to talk to.
    #[serde(default)]
    pub network: RoochNetwork,

    /// Overrides the network's RPC endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,

    /// Overrides the network's chain id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    /// Network used to render and parse Bitcoin addresses.
    #[serde(default = "default_bitcoin_network")]
    pub bitcoin_network: BitcoinNetwork,

    /// Gas limit put on transactions built by the client.
    #[serde(default = "default_max_gas_amount")]
    pub max_gas_amount: u64,

    /// What a Bitcoin wallet signs when authorizing a transaction.
    #[serde(default)]
    pub bitcoin_sign_with: SignWith,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Use JSON format for logs instead of compact format.
    #[serde(default)]
    pub json_format: bool,
}

fn default_bitcoin_network() -> BitcoinNetwork {
    DEFAULT_BITCOIN_NETWORK
}

fn default_max_gas_amount() -> u64 {
    DEFAULT_MAX_GAS_AMOUNT
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            network: RoochNetwork::default(),
            rpc_url: None,
            chain_id: None,
            bitcoin_network: default_bitcoin_network(),
            max_gas_amount: default_max_gas_amount(),
            bitcoin_sign_with: SignWith::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), network = %config.network, "loaded client config");
        Ok(config)
    }

    /// RPC endpoint, preferring the explicit override.
    pub fn rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.rpc_url())
    }

    /// Chain id put in transactions, preferring the explicit override.
    pub fn chain_id(&self) -> u64 {
        self.chain_id.unwrap_or_else(|| self.network.chain_id())
    }
}
