//! Core codec traits and buffer helpers.

use crate::{errors::CodecError, uleb128::Uleb128};

/// A value with a single canonical byte representation.
pub trait Codec: Sized {
    /// Writes the canonical encoding of `self`.
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError>;

    /// Reads a value, consuming exactly its encoding from the decoder.
    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError>;
}

/// Sink for encoded bytes.
pub trait Encoder {
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError>;
}

impl Encoder for Vec<u8> {
    fn write_buf(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// Source of encoded bytes.
pub trait Decoder {
    /// Fills `buf` completely or fails without consuming anything.
    fn read_buf(&mut self, buf: &mut [u8]) -> Result<(), CodecError>;

    /// Number of bytes left in the input.
    fn remaining(&self) -> usize;

    fn read_arr<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut arr = [0; N];
        self.read_buf(&mut arr)?;
        Ok(arr)
    }

    /// Reads `len` bytes, checking the length against the input first.
    fn read_vec(&mut self, len: usize) -> Result<Vec<u8>, CodecError> {
        if len > self.remaining() {
            return Err(CodecError::LengthOverflow {
                declared: len as u64,
                remaining: self.remaining(),
            });
        }
        let mut buf = vec![0; len];
        self.read_buf(&mut buf)?;
        Ok(buf)
    }
}

/// Decoder over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct SliceDecoder<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceDecoder<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Position of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.buf.len()
    }
}

impl Decoder for SliceDecoder<'_> {
    fn read_buf(&mut self, buf: &mut [u8]) -> Result<(), CodecError> {
        let remaining = self.remaining();
        if buf.len() > remaining {
            return Err(CodecError::Truncated {
                needed: buf.len(),
                remaining,
            });
        }
        let end = self.pos + buf.len();
        buf.copy_from_slice(&self.buf[self.pos..end]);
        self.pos = end;
        Ok(())
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
}

/// Encodes a value into a fresh buffer.
pub fn encode_to_vec<T: Codec>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    value.encode(&mut buf)?;
    Ok(buf)
}

/// Decodes a value that must span the whole buffer.
pub fn decode_buf_exact<T: Codec>(buf: &[u8]) -> Result<T, CodecError> {
    let mut dec = SliceDecoder::new(buf);
    let value = T::decode(&mut dec)?;
    match dec.remaining() {
        0 => Ok(value),
        n => Err(CodecError::TrailingBytes(n)),
    }
}

/// Writes a length prefix for a byte sequence, string or sequence.
pub fn encode_len(len: usize, enc: &mut impl Encoder) -> Result<(), CodecError> {
    let len = u32::try_from(len).map_err(|_| CodecError::Uleb128Overflow)?;
    Uleb128::new(len).encode(enc)
}

/// Reads a length prefix and checks it against the remaining input.
///
/// Every element this crate encodes takes at least one byte, so a count larger
/// than the remaining input can never be satisfied.
pub fn decode_len(dec: &mut impl Decoder) -> Result<usize, CodecError> {
    let len = Uleb128::decode(dec)?.inner() as usize;
    if len > dec.remaining() {
        return Err(CodecError::LengthOverflow {
            declared: len as u64,
            remaining: dec.remaining(),
        });
    }
    Ok(len)
}

/// Writes a tagged-union discriminant.
pub fn encode_variant_index(index: u32, enc: &mut impl Encoder) -> Result<(), CodecError> {
    Uleb128::new(index).encode(enc)
}

/// Reads a tagged-union discriminant. Callers match it against their closed
/// variant set and report [`CodecError::UnknownVariant`] otherwise.
pub fn decode_variant_index(dec: &mut impl Decoder) -> Result<u32, CodecError> {
    Ok(Uleb128::decode(dec)?.inner())
}
