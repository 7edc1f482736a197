//! Hash functions used for address derivation and transaction identity.

use std::{fmt, str::FromStr};

use blake2::Blake2b;
use digest::{consts::U32, Digest};
use sha2::Sha256;
use sha3::Sha3_256;

use crate::errors::AddressError;

type Blake2b256 = Blake2b<U32>;

fn digest_parts<D: Digest>(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    digest_parts::<Sha256>(&[data])
}

pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    digest_parts::<Sha3_256>(&[data])
}

/// SHA3-256 over the concatenation of `parts`.
pub fn sha3_256_parts(parts: &[&[u8]]) -> [u8; 32] {
    digest_parts::<Sha3_256>(parts)
}

/// BLAKE2b with a 32-byte output, the hash behind every native address
/// derived from key material or foreign addresses.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    digest_parts::<Blake2b256>(&[data])
}

pub fn blake2b_256_parts(parts: &[&[u8]]) -> [u8; 32] {
    digest_parts::<Blake2b256>(parts)
}

/// A 32-byte hash, rendered as `0x`-prefixed lowercase hex.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct H256([u8; 32]);

impl_buf32_core!(H256);
impl_buf32_serde!(H256);

impl H256 {
    pub fn sha3_256(data: &[u8]) -> Self {
        Self(sha3_256(data))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H256({self})")
    }
}

impl FromStr for H256 {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| AddressError::InvalidHex {
            input: s.to_owned(),
            reason: e.to_string(),
        })?;
        Self::try_from(bytes.as_slice())
    }
}
