//! Errors during parsing and conversion of identifiers.

use thiserror::Error;

/// Errors raised while parsing or converting native addresses and object ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The input was neither hex nor bech32 with the expected prefix.
    #[error("unrecognized address format: {0:?}")]
    UnrecognizedFormat(String),

    /// Hex digits were malformed.
    #[error("invalid hex in {input:?}: {reason}")]
    InvalidHex { input: String, reason: String },

    /// Bech32 decoding failed (bad checksum, bad characters or wrong variant).
    #[error("invalid bech32 address {input:?}: {reason}")]
    InvalidBech32 { input: String, reason: String },

    /// Bech32 text used an unexpected human-readable prefix.
    #[error("unexpected bech32 prefix {found:?} (expected {expected:?})")]
    WrongPrefix {
        expected: &'static str,
        found: String,
    },

    /// The decoded bytes were not the required length.
    #[error("invalid length (expected {expected} bytes, got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    /// An object id must hold at least one address.
    #[error("empty object id")]
    EmptyObjectId,
}
