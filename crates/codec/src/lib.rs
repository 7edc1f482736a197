//! Canonical binary codec.
//!
//! Every value has exactly one valid encoding: integers are fixed-width little
//! endian, variable-length data is prefixed with a ULEB128 length and tagged
//! unions are prefixed with a ULEB128 variant index. This is the format used
//! for transaction payloads, authenticators and every other on-chain structure.

#[macro_use]
mod macros;

mod codec;
mod errors;
mod impls;
mod uleb128;

pub use codec::{
    decode_buf_exact, decode_len, decode_variant_index, encode_len, encode_to_vec,
    encode_variant_index, Codec, Decoder, Encoder, SliceDecoder,
};
pub use errors::CodecError;
pub use uleb128::Uleb128;

pub type CodecResult<T> = Result<T, CodecError>;
