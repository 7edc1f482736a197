/// Implements [`Codec`](crate::Codec) for a struct by encoding its fields in
/// the listed order.
#[macro_export]
macro_rules! impl_struct_codec {
    ($name:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Codec for $name {
            fn encode(
                &self,
                enc: &mut impl $crate::Encoder,
            ) -> ::core::result::Result<(), $crate::CodecError> {
                $( $crate::Codec::encode(&self.$field, enc)?; )*
                Ok(())
            }

            fn decode(
                dec: &mut impl $crate::Decoder,
            ) -> ::core::result::Result<Self, $crate::CodecError> {
                Ok(Self {
                    $( $field: $crate::Codec::decode(dec)?, )*
                })
            }
        }
    };
}
