//! Bitcoin and Nostr address handling, and derivation of native addresses
//! from them.

mod address;
mod errors;
mod network;
mod nostr;
mod view;

pub use address::{
    taproot_rooch_address, BitcoinAddress, BitcoinAddressType, MAX_ADDRESS_LEN, MIN_ADDRESS_LEN,
};
pub use errors::BitcoinAddressError;
pub use network::{BitcoinNetwork, DEFAULT_BITCOIN_NETWORK};
pub use nostr::{NostrAddress, NOSTR_HRP};
pub use view::AddressView;
