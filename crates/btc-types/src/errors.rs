use thiserror::Error;

/// Errors while parsing, building or converting Bitcoin and Nostr addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitcoinAddressError {
    /// Address text outside the accepted length range.
    #[error("address length {0} outside 14..=74 characters")]
    InvalidLength(usize),

    /// Bech32 text with a human-readable prefix that is not a Bitcoin network.
    #[error("unknown bech32 prefix {0:?}")]
    UnknownHrp(String),

    /// Witness version 0 must use bech32, later versions bech32m.
    #[error("wrong checksum variant for witness version {0}")]
    ChecksumVariantMismatch(u8),

    /// Witness program with more than 4 padding bits or nonzero padding.
    #[error("non-canonical padding in segwit address {0:?}")]
    InvalidPadding(String),

    #[error("bech32 address is missing a witness version")]
    MissingWitnessVersion,

    #[error("invalid witness program length {length} for version {version}")]
    InvalidWitnessProgramLength { version: u8, length: usize },

    #[error("unsupported witness version {0}")]
    UnsupportedWitnessVersion(u8),

    #[error("invalid base58check address {input:?}: {reason}")]
    InvalidBase58 { input: String, reason: String },

    /// Base58 payload must be a version byte plus a 20-byte hash.
    #[error("invalid base58 payload length {0} (expected 21)")]
    InvalidBase58PayloadLength(usize),

    #[error("unknown base58 version byte {0:#04x}")]
    UnknownVersionByte(u8),

    #[error("invalid wrapped address bytes: {0}")]
    InvalidWrappedBytes(&'static str),

    #[error("invalid hex {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    #[error("invalid public key: {0}")]
    InvalidPublicKey(#[from] secp256k1::Error),

    #[error("invalid public key length {0} (expected 32 or 33)")]
    InvalidPublicKeyLength(usize),

    #[error("unknown bitcoin network {0:?}")]
    UnknownNetwork(String),

    #[error("invalid nostr address {input:?}: {reason}")]
    InvalidNostr { input: String, reason: String },

    /// Bech32 encoding failed.
    #[error("bech32 encoding failed: {0}")]
    Encoding(String),
}
