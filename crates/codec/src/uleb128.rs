//! ULEB128 lengths and discriminants.

use crate::{Codec, CodecError, Decoder, Encoder};

/// Unsigned LEB128 integer limited to the `u32` range.
///
/// Each byte carries 7 data bits, least significant group first, with the high
/// bit set on every byte but the last. At most 5 bytes are used.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uleb128(u32);

impl Uleb128 {
    pub const MAX_BYTES: usize = 5;

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn inner(self) -> u32 {
        self.0
    }

    /// Number of bytes the encoding takes.
    pub const fn encoded_len(self) -> usize {
        let mut value = self.0 >> 7;
        let mut len = 1;
        while value > 0 {
            value >>= 7;
            len += 1;
        }
        len
    }
}

impl From<u32> for Uleb128 {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Codec for Uleb128 {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        let mut value = self.0;
        while value >= 0x80 {
            enc.write_buf(&[0x80 | (value & 0x7F) as u8])?;
            value >>= 7;
        }
        enc.write_buf(&[value as u8])
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let mut value: u64 = 0;
        for i in 0..Self::MAX_BYTES {
            let [byte] = dec.read_arr::<1>()?;
            value |= ((byte & 0x7F) as u64) << (7 * i);
            if byte & 0x80 == 0 {
                // A zero final group after the first byte means a shorter
                // encoding existed.
                if i > 0 && byte == 0 {
                    return Err(CodecError::NonCanonicalUleb128);
                }
                return u32::try_from(value)
                    .map(Self)
                    .map_err(|_| CodecError::Uleb128Overflow);
            }
        }
        Err(CodecError::Uleb128Overflow)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{decode_buf_exact, encode_to_vec};

    #[test]
    fn test_known_encodings() {
        let cases: &[(u32, &str)] = &[
            (0, "00"),
            (1, "01"),
            (127, "7f"),
            (128, "8001"),
            (300, "ac02"),
            (16384, "808001"),
            (u32::MAX, "ffffffff0f"),
        ];
        for (value, expected) in cases {
            let bytes = encode_to_vec(&Uleb128::new(*value)).unwrap();
            assert_eq!(hex::encode(&bytes), *expected, "value {value}");
            assert_eq!(bytes.len(), Uleb128::new(*value).encoded_len());
        }
    }

    #[test]
    fn test_rejects_non_canonical() {
        let res = decode_buf_exact::<Uleb128>(&[0x80, 0x00]);
        assert_eq!(res, Err(CodecError::NonCanonicalUleb128));
    }

    #[test]
    fn test_rejects_overflow() {
        // 2^32 needs a sixth group of bits.
        let res = decode_buf_exact::<Uleb128>(&[0x80, 0x80, 0x80, 0x80, 0x10]);
        assert_eq!(res, Err(CodecError::Uleb128Overflow));

        let res = decode_buf_exact::<Uleb128>(&[0xff, 0xff, 0xff, 0xff, 0xff, 0x01]);
        assert_eq!(res, Err(CodecError::Uleb128Overflow));
    }

    #[test]
    fn test_rejects_truncated() {
        let res = decode_buf_exact::<Uleb128>(&[0x80, 0x80]);
        assert!(matches!(res, Err(CodecError::Truncated { .. })));
    }

    proptest! {
        #[test]
        fn proptest_roundtrip(value: u32) {
            let bytes = encode_to_vec(&Uleb128::new(value)).unwrap();
            prop_assert_eq!(decode_buf_exact::<Uleb128>(&bytes).unwrap().inner(), value);
        }
    }
}
