//! Codec-encoded arguments for Move function calls.

use std::fmt;

use ethnum::U256;
use rooch_codec::{encode_to_vec, Codec, CodecError};
use rooch_identifiers::{ObjectId, RoochAddress};

use crate::move_types::StructTag;

/// One encoded argument of a Move call.
#[derive(Clone, PartialEq, Eq)]
pub struct MoveArg(Vec<u8>);

impl MoveArg {
    /// Encodes any codec value. Move `vector<T>` arguments are slices of the
    /// element type.
    pub fn new<T: Codec>(value: &T) -> Result<Self, CodecError> {
        encode_to_vec(value).map(Self)
    }

    /// Wraps bytes that are already encoded.
    pub fn from_encoded(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn u8(v: u8) -> Self {
        Self(vec![v])
    }

    pub fn u16(v: u16) -> Self {
        Self(v.to_le_bytes().to_vec())
    }

    pub fn u32(v: u32) -> Self {
        Self(v.to_le_bytes().to_vec())
    }

    pub fn u64(v: u64) -> Self {
        Self(v.to_le_bytes().to_vec())
    }

    pub fn u128(v: u128) -> Self {
        Self(v.to_le_bytes().to_vec())
    }

    pub fn u256(v: U256) -> Self {
        Self(v.to_le_bytes().to_vec())
    }

    pub fn bool(v: bool) -> Self {
        Self(vec![u8::from(v)])
    }

    pub fn address(address: RoochAddress) -> Self {
        Self(address.as_bytes().to_vec())
    }

    /// A `0x1::string::String`, which shares the layout of a byte vector.
    pub fn string(s: &str) -> Result<Self, CodecError> {
        Self::new(&s.to_owned())
    }

    pub fn object_id(id: &ObjectId) -> Result<Self, CodecError> {
        Self::new(id)
    }

    /// Id of the named object whose type is `tag`.
    pub fn object(tag: &StructTag) -> Result<Self, CodecError> {
        Self::object_id(&ObjectId::named(&tag.to_canonical_string()))
    }

    pub fn vector<T: Codec + Clone>(items: &[T]) -> Result<Self, CodecError> {
        Self::new(&items.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for MoveArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveArg({})", self.to_hex())
    }
}
