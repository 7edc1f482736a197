//! Crate-internal impls shared by the 32-byte identifier types.

/// Generates the byte-level API for a `struct Foo([u8; 32]);` identifier.
///
/// Provides constructors, accessors, the `LEN` constant, array conversions,
/// a length-checked `TryFrom<&[u8]>` and a raw fixed-width [`Codec`] impl.
///
/// [`Codec`]: rooch_codec::Codec
macro_rules! impl_buf32_core {
    ($name:ident) => {
        impl $name {
            pub const LEN: usize = 32;

            pub const fn new(data: [u8; 32]) -> Self {
                Self(data)
            }

            pub const fn zero() -> Self {
                Self([0; 32])
            }

            pub const fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            pub const fn into_bytes(self) -> [u8; 32] {
                self.0
            }

            pub const fn is_zero(&self) -> bool {
                let mut i = 0;
                while i < 32 {
                    if self.0[i] != 0 {
                        return false;
                    }
                    i += 1;
                }
                true
            }
        }

        impl ::std::convert::AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ::std::convert::From<[u8; 32]> for $name {
            fn from(data: [u8; 32]) -> Self {
                Self(data)
            }
        }

        impl ::std::convert::From<$name> for [u8; 32] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::std::convert::TryFrom<&[u8]> for $name {
            type Error = $crate::errors::AddressError;

            fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
                <[u8; 32]>::try_from(value).map(Self).map_err(|_| {
                    $crate::errors::AddressError::InvalidLength {
                        expected: 32,
                        actual: value.len(),
                    }
                })
            }
        }

        impl ::rooch_codec::Codec for $name {
            fn encode(
                &self,
                enc: &mut impl ::rooch_codec::Encoder,
            ) -> Result<(), ::rooch_codec::CodecError> {
                enc.write_buf(&self.0)
            }

            fn decode(
                dec: &mut impl ::rooch_codec::Decoder,
            ) -> Result<Self, ::rooch_codec::CodecError> {
                dec.read_arr::<32>().map(Self)
            }
        }
    };
}

/// Serializes through `Display`/`FromStr` for human-readable formats and as
/// the raw 32 bytes for binary ones.
macro_rules! impl_buf32_serde {
    ($name:ident) => {
        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                if serializer.is_human_readable() {
                    serializer.collect_str(self)
                } else {
                    ::serde::Serialize::serialize(&self.0, serializer)
                }
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                if deserializer.is_human_readable() {
                    let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                    s.parse().map_err(::serde::de::Error::custom)
                } else {
                    <[u8; 32] as ::serde::Deserialize>::deserialize(deserializer).map(Self)
                }
            }
        }
    };
}
