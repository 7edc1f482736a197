//! Codec impls for primitive and container types.

use ethnum::U256;

use crate::{
    codec::{decode_len, encode_len},
    Codec, CodecError, Decoder, Encoder,
};

macro_rules! impl_le_int_codec {
    ($($ty:ty),*) => {
        $(
            impl Codec for $ty {
                fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
                    enc.write_buf(&self.to_le_bytes())
                }

                fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
                    Ok(<$ty>::from_le_bytes(dec.read_arr()?))
                }
            }
        )*
    };
}

impl_le_int_codec!(u8, u16, u32, u64, u128);

impl Codec for U256 {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&self.to_le_bytes())
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        Ok(U256::from_le_bytes(dec.read_arr()?))
    }
}

impl Codec for bool {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(&[*self as u8])
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        match dec.read_arr::<1>()? {
            [0] => Ok(false),
            [1] => Ok(true),
            [b] => Err(CodecError::InvalidBool(b)),
        }
    }
}

/// Fixed-size arrays are written raw, without a length prefix.
impl<const N: usize> Codec for [u8; N] {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        enc.write_buf(self)
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        dec.read_arr()
    }
}

impl Codec for String {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        encode_len(self.len(), enc)?;
        enc.write_buf(self.as_bytes())
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let len = decode_len(dec)?;
        let buf = dec.read_vec(len)?;
        String::from_utf8(buf).map_err(|_| CodecError::InvalidUtf8)
    }
}

impl<T: Codec> Codec for Vec<T> {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        encode_len(self.len(), enc)?;
        for item in self {
            item.encode(enc)?;
        }
        Ok(())
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let count = decode_len(dec)?;
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            items.push(T::decode(dec)?);
        }
        Ok(items)
    }
}

impl<T: Codec> Codec for Option<T> {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        match self {
            None => enc.write_buf(&[0]),
            Some(v) => {
                enc.write_buf(&[1])?;
                v.encode(enc)
            }
        }
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        match dec.read_arr::<1>()? {
            [0] => Ok(None),
            [1] => Ok(Some(T::decode(dec)?)),
            [tag] => Err(CodecError::InvalidOptionTag(tag)),
        }
    }
}

impl<T: Codec> Codec for Box<T> {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.as_ref().encode(enc)
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        T::decode(dec).map(Box::new)
    }
}

impl<A: Codec, B: Codec> Codec for (A, B) {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.0.encode(enc)?;
        self.1.encode(enc)
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let a = A::decode(dec)?;
        let b = B::decode(dec)?;
        Ok((a, b))
    }
}
