//! Bitcoin networks and their address prefixes.

use std::{fmt, str::FromStr};

use bitcoin::Network;
use serde::{Deserialize, Serialize};

use crate::errors::BitcoinAddressError;

/// Network used when none is configured.
pub const DEFAULT_BITCOIN_NETWORK: BitcoinNetwork = BitcoinNetwork::Regtest;

const PUBKEY_ADDRESS_PREFIX_MAIN: u8 = 0x00;
const PUBKEY_ADDRESS_PREFIX_TEST: u8 = 0x6F;
const SCRIPT_ADDRESS_PREFIX_MAIN: u8 = 0x05;
const SCRIPT_ADDRESS_PREFIX_TEST: u8 = 0xC4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitcoinNetwork {
    #[serde(alias = "mainnet")]
    Bitcoin,
    Testnet,
    Signet,
    Regtest,
}

impl BitcoinNetwork {
    /// Human-readable prefix of segwit addresses.
    pub fn hrp(self) -> &'static str {
        match self {
            Self::Bitcoin => "bc",
            Self::Testnet | Self::Signet => "tb",
            Self::Regtest => "bcrt",
        }
    }

    /// Base58 version byte of P2PKH addresses.
    pub fn pubkey_address_prefix(self) -> u8 {
        match self {
            Self::Bitcoin => PUBKEY_ADDRESS_PREFIX_MAIN,
            _ => PUBKEY_ADDRESS_PREFIX_TEST,
        }
    }

    /// Base58 version byte of P2SH addresses.
    pub fn script_address_prefix(self) -> u8 {
        match self {
            Self::Bitcoin => SCRIPT_ADDRESS_PREFIX_MAIN,
            _ => SCRIPT_ADDRESS_PREFIX_TEST,
        }
    }

    pub fn is_mainnet(self) -> bool {
        self == Self::Bitcoin
    }

    /// Resolves the network named by a segwit prefix. `tb` is shared by
    /// testnet and signet, so `hint` picks between them.
    pub(crate) fn from_hrp(hrp: &str, hint: Self) -> Option<Self> {
        match hrp {
            "bc" => Some(Self::Bitcoin),
            "tb" if hint == Self::Signet => Some(Self::Signet),
            "tb" => Some(Self::Testnet),
            "bcrt" => Some(Self::Regtest),
            _ => None,
        }
    }

    /// Resolves the network family of a base58 version byte. Test networks
    /// share their version bytes, so `hint` picks among them.
    pub(crate) fn from_base58_prefix(prefix: u8, hint: Self) -> Option<Self> {
        let test_net = if hint.is_mainnet() { Self::Testnet } else { hint };
        match prefix {
            PUBKEY_ADDRESS_PREFIX_MAIN | SCRIPT_ADDRESS_PREFIX_MAIN => Some(Self::Bitcoin),
            PUBKEY_ADDRESS_PREFIX_TEST | SCRIPT_ADDRESS_PREFIX_TEST => Some(test_net),
            _ => None,
        }
    }
}

impl From<BitcoinNetwork> for Network {
    fn from(network: BitcoinNetwork) -> Self {
        match network {
            BitcoinNetwork::Bitcoin => Network::Bitcoin,
            BitcoinNetwork::Testnet => Network::Testnet,
            BitcoinNetwork::Signet => Network::Signet,
            BitcoinNetwork::Regtest => Network::Regtest,
        }
    }
}

impl fmt::Display for BitcoinNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bitcoin => "bitcoin",
            Self::Testnet => "testnet",
            Self::Signet => "signet",
            Self::Regtest => "regtest",
        })
    }
}

impl FromStr for BitcoinNetwork {
    type Err = BitcoinAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bitcoin" | "mainnet" => Ok(Self::Bitcoin),
            "testnet" => Ok(Self::Testnet),
            "signet" => Ok(Self::Signet),
            "regtest" => Ok(Self::Regtest),
            _ => Err(BitcoinAddressError::UnknownNetwork(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(BitcoinNetwork::Bitcoin.hrp(), "bc");
        assert_eq!(BitcoinNetwork::Signet.hrp(), "tb");
        assert_eq!(BitcoinNetwork::Regtest.hrp(), "bcrt");
        assert_eq!(BitcoinNetwork::Bitcoin.pubkey_address_prefix(), 0x00);
        assert_eq!(BitcoinNetwork::Testnet.pubkey_address_prefix(), 0x6F);
        assert_eq!(BitcoinNetwork::Bitcoin.script_address_prefix(), 0x05);
        assert_eq!(BitcoinNetwork::Regtest.script_address_prefix(), 0xC4);
    }

    #[test]
    fn test_hrp_resolution_uses_hint() {
        let signet = BitcoinNetwork::Signet;
        assert_eq!(BitcoinNetwork::from_hrp("tb", signet), Some(signet));
        assert_eq!(
            BitcoinNetwork::from_hrp("tb", BitcoinNetwork::Bitcoin),
            Some(BitcoinNetwork::Testnet)
        );
        assert_eq!(BitcoinNetwork::from_hrp("ltc", signet), None);
    }

    #[test]
    fn test_names() {
        assert_eq!("mainnet".parse::<BitcoinNetwork>().unwrap(), BitcoinNetwork::Bitcoin);
        assert_eq!("Regtest".parse::<BitcoinNetwork>().unwrap(), BitcoinNetwork::Regtest);
        assert!("dogecoin".parse::<BitcoinNetwork>().is_err());

        let json = serde_json::to_string(&BitcoinNetwork::Signet).unwrap();
        assert_eq!(json, "\"signet\"");
        assert_eq!(
            serde_json::from_str::<BitcoinNetwork>("\"mainnet\"").unwrap(),
            BitcoinNetwork::Bitcoin
        );
    }
}
