//! Composite object identifiers.

use std::{fmt, str::FromStr};

use rooch_codec::{Codec, CodecError, Decoder, Encoder};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{address::RoochAddress, errors::AddressError, hash::sha3_256_parts};

/// Path of addresses identifying an object. A root object has a single
/// address; each child appends one derived from its parent and key.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(Vec<RoochAddress>);

impl ObjectId {
    pub fn new(path: Vec<RoochAddress>) -> Result<Self, AddressError> {
        if path.is_empty() {
            return Err(AddressError::EmptyObjectId);
        }
        Ok(Self(path))
    }

    /// Root object id for a single address.
    pub fn from_address(address: RoochAddress) -> Self {
        Self(vec![address])
    }

    /// Root object id of a named (singleton) object, keyed by its fully
    /// qualified type name.
    pub fn named(type_name: &str) -> Self {
        Self::from_address(RoochAddress::new(sha3_256_parts(&[type_name.as_bytes()])))
    }

    pub fn path(&self) -> &[RoochAddress] {
        &self.0
    }

    /// Root of this object's path.
    pub fn root(&self) -> Self {
        Self(self.0.iter().take(1).copied().collect())
    }

    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    pub fn parent(&self) -> Option<Self> {
        match self.0.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self(rest.to_vec())),
            _ => None,
        }
    }

    /// Child id: this path plus `sha3-256(concatenated path || key)`.
    pub fn child(&self, key: &[u8]) -> Self {
        let parent = self.to_bytes();
        let id = RoochAddress::new(sha3_256_parts(&[&parent, key]));
        let mut path = self.0.clone();
        path.push(id);
        Self(path)
    }

    /// Concatenated address bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.iter().flat_map(|a| a.into_bytes()).collect()
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.is_empty() || bytes.len() % RoochAddress::LEN != 0 {
            return Err(AddressError::InvalidLength {
                expected: RoochAddress::LEN * bytes.len().div_ceil(RoochAddress::LEN).max(1),
                actual: bytes.len(),
            });
        }
        bytes
            .chunks_exact(RoochAddress::LEN)
            .map(RoochAddress::try_from)
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::new)
    }
}

impl From<RoochAddress> for ObjectId {
    fn from(address: RoochAddress) -> Self {
        Self::from_address(address)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.to_bytes()))
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({self})")
    }
}

impl FromStr for ObjectId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| AddressError::InvalidHex {
            input: s.to_owned(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }
}

impl Codec for ObjectId {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.0.encode(enc)
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let path = Vec::<RoochAddress>::decode(dec)?;
        Self::new(path).map_err(|_| CodecError::MalformedField("empty object id"))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        } else {
            let path = Vec::<RoochAddress>::deserialize(deserializer)?;
            Self::new(path).map_err(de::Error::custom)
        }
    }
}
