use std::fmt;

use rooch_identifiers::RoochAddress;
use serde::Serialize;

use crate::{
    errors::BitcoinAddressError,
    network::{BitcoinNetwork, DEFAULT_BITCOIN_NETWORK},
    BitcoinAddress, NostrAddress,
};

/// Every address form of one Secp256k1 public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressView {
    pub bitcoin_address: BitcoinAddress,
    pub nostr_address: NostrAddress,
    pub rooch_address: RoochAddress,
}

impl AddressView {
    /// Builds the view on the default (regtest) network.
    pub fn from_public_key(public_key: &[u8]) -> Result<Self, BitcoinAddressError> {
        Self::from_public_key_with_network(public_key, DEFAULT_BITCOIN_NETWORK)
    }

    pub fn from_public_key_with_network(
        public_key: &[u8],
        network: BitcoinNetwork,
    ) -> Result<Self, BitcoinAddressError> {
        let bitcoin_address = BitcoinAddress::from_public_key(public_key, network)?;
        let nostr_address = NostrAddress::from_public_key(public_key)?;
        let rooch_address = bitcoin_address.to_rooch_address();
        Ok(Self {
            bitcoin_address,
            nostr_address,
            rooch_address,
        })
    }
}

impl fmt::Display for AddressView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rooch_address)
    }
}
