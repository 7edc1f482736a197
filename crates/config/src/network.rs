use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Networks the client knows how to reach without extra configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoochNetwork {
    #[default]
    #[serde(alias = "local")]
    Localnet,
    #[serde(alias = "dev")]
    Devnet,
    #[serde(alias = "test")]
    Testnet,
    #[serde(alias = "main")]
    Mainnet,
}

impl RoochNetwork {
    pub fn chain_id(self) -> u64 {
        match self {
            Self::Localnet => 4,
            Self::Devnet => 3,
            Self::Testnet => 2,
            Self::Mainnet => 1,
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            4 => Some(Self::Localnet),
            3 => Some(Self::Devnet),
            2 => Some(Self::Testnet),
            1 => Some(Self::Mainnet),
            _ => None,
        }
    }

    /// Public RPC endpoint of the network.
    pub fn rpc_url(self) -> &'static str {
        match self {
            Self::Localnet => "http://127.0.0.1:6767",
            Self::Devnet => "https://dev-seed.rooch.network",
            Self::Testnet => "https://test-seed.rooch.network",
            Self::Mainnet => "https://main-seed.rooch.network",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Localnet => "localnet",
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
            Self::Mainnet => "mainnet",
        }
    }
}

impl fmt::Display for RoochNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoochNetwork {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "localnet" | "local" => Ok(Self::Localnet),
            "devnet" | "dev" => Ok(Self::Devnet),
            "testnet" | "test" => Ok(Self::Testnet),
            "mainnet" | "main" => Ok(Self::Mainnet),
            _ => Err(ConfigError::UnknownNetwork(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RoochNetwork; 4] = [
        RoochNetwork::Localnet,
        RoochNetwork::Devnet,
        RoochNetwork::Testnet,
        RoochNetwork::Mainnet,
    ];

    #[test]
    fn test_chain_ids() {
        let ids: Vec<_> = ALL.iter().map(|n| n.chain_id()).collect();
        assert_eq!(ids, [4, 3, 2, 1]);
        for network in ALL {
            assert_eq!(RoochNetwork::from_chain_id(network.chain_id()), Some(network));
        }
        assert_eq!(RoochNetwork::from_chain_id(20230101), None);
    }

    #[test]
    fn test_parse_names() {
        for network in ALL {
            assert_eq!(network.to_string().parse::<RoochNetwork>().unwrap(), network);
        }
        assert_eq!("Main".parse::<RoochNetwork>().unwrap(), RoochNetwork::Mainnet);
        assert!(matches!(
            "moonnet".parse::<RoochNetwork>(),
            Err(ConfigError::UnknownNetwork(s)) if s == "moonnet"
        ));
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&RoochNetwork::Devnet).unwrap(),
            "\"devnet\""
        );
        assert_eq!(
            serde_json::from_str::<RoochNetwork>("\"test\"").unwrap(),
            RoochNetwork::Testnet
        );
    }
}
