//! Nostr public-key addresses (`npub...`).

use std::{fmt, str::FromStr};

use bech32::{primitives::decode::CheckedHrpstring, Bech32, Hrp};
use rooch_identifiers::RoochAddress;
use secp256k1::XOnlyPublicKey;
use serde::{Serialize, Serializer};

use crate::{
    address::{taproot_rooch_address, x_only_public_key},
    errors::BitcoinAddressError,
    network::BitcoinNetwork,
    BitcoinAddress,
};

pub const NOSTR_HRP: &str = "npub";

/// A Nostr address: the bech32 `npub` encoding of an x-only public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NostrAddress {
    text: String,
    public_key: XOnlyPublicKey,
}

impl NostrAddress {
    /// Builds the address of a Secp256k1 key given as 33 compressed or 32
    /// x-only bytes.
    pub fn from_public_key(public_key: &[u8]) -> Result<Self, BitcoinAddressError> {
        let public_key = x_only_public_key(public_key)?;
        let text = bech32::encode::<Bech32>(Hrp::parse_unchecked(NOSTR_HRP), &public_key.serialize())
            .map_err(|e| BitcoinAddressError::Encoding(e.to_string()))?;
        Ok(Self { text, public_key })
    }

    /// The 32 x-only public key bytes.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.public_key.serialize()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Taproot address of the same key.
    pub fn to_bitcoin_address(
        &self,
        network: BitcoinNetwork,
    ) -> Result<BitcoinAddress, BitcoinAddressError> {
        BitcoinAddress::from_public_key(&self.public_key.serialize(), network)
    }

    /// Native address, derived through the taproot address of the key.
    pub fn to_rooch_address(&self) -> RoochAddress {
        taproot_rooch_address(self.public_key)
    }
}

impl FromStr for NostrAddress {
    type Err = BitcoinAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| BitcoinAddressError::InvalidNostr {
            input: s.to_owned(),
            reason,
        };

        let checked = CheckedHrpstring::new::<Bech32>(s).map_err(|e| invalid(e.to_string()))?;
        let hrp = checked.hrp().to_lowercase();
        if hrp != NOSTR_HRP {
            return Err(invalid(format!("unexpected prefix {hrp:?}")));
        }
        let bytes: Vec<u8> = checked.byte_iter().collect();
        if bytes.len() != 32 {
            return Err(invalid(format!("expected 32 key bytes, got {}", bytes.len())));
        }
        let public_key = XOnlyPublicKey::from_slice(&bytes)?;
        Ok(Self {
            text: s.to_lowercase(),
            public_key,
        })
    }
}

impl fmt::Display for NostrAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for NostrAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
