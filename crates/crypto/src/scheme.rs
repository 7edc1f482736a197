//! Signature scheme identifiers and scheme-tagged signatures.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::CryptoError;

/// Length of a signature in either scheme.
pub const SIGNATURE_LENGTH: usize = 64;

/// The signature schemes accepted by the native validator. The discriminant
/// is the one-byte flag used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum SignatureScheme {
    #[serde(rename = "ED25519")]
    Ed25519 = 0,
    #[serde(rename = "Secp256k1")]
    Secp256k1 = 1,
}

impl SignatureScheme {
    pub fn flag(self) -> u8 {
        self as u8
    }

    pub fn from_flag(flag: u8) -> Result<Self, CryptoError> {
        match flag {
            0 => Ok(Self::Ed25519),
            1 => Ok(Self::Secp256k1),
            other => Err(CryptoError::UnknownSchemeFlag(other)),
        }
    }

    /// Length of a serialized public key. Secp256k1 keys are compressed.
    pub fn public_key_length(self) -> usize {
        match self {
            Self::Ed25519 => 32,
            Self::Secp256k1 => 33,
        }
    }

    pub fn signature_length(self) -> usize {
        SIGNATURE_LENGTH
    }

    /// Byte prepended to the public key when deriving a native address from
    /// it.
    pub fn address_size_byte(self) -> u8 {
        match self {
            Self::Ed25519 => 32,
            Self::Secp256k1 => 33,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ed25519 => "ED25519",
            Self::Secp256k1 => "Secp256k1",
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureScheme {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ed25519") {
            Ok(Self::Ed25519)
        } else if s.eq_ignore_ascii_case("secp256k1") {
            Ok(Self::Secp256k1)
        } else {
            Err(CryptoError::UnknownScheme(s.to_owned()))
        }
    }
}

/// A signature together with the scheme that produced it.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    scheme: SignatureScheme,
    bytes: [u8; SIGNATURE_LENGTH],
}

impl Signature {
    pub fn new(scheme: SignatureScheme, bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self { scheme, bytes }
    }

    pub fn from_slice(scheme: SignatureScheme, bytes: &[u8]) -> Result<Self, CryptoError> {
        let bytes = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureLength {
                expected: SIGNATURE_LENGTH,
                actual: bytes.len(),
            })?;
        Ok(Self { scheme, bytes })
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}, 0x{})", self.scheme, hex::encode(self.bytes))
    }
}
