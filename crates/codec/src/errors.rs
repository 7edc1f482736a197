use thiserror::Error;

/// Errors produced while encoding or decoding canonical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The input ended before the value was complete.
    #[error("unexpected end of input (needed {needed} bytes, {remaining} remaining)")]
    Truncated { needed: usize, remaining: usize },

    /// A length prefix claims more data than the input holds.
    #[error("declared length {declared} exceeds remaining input ({remaining} bytes)")]
    LengthOverflow { declared: u64, remaining: usize },

    /// A tagged union carried a discriminant outside its variant set.
    #[error("unknown variant index {index} for {ty}")]
    UnknownVariant { ty: &'static str, index: u32 },

    /// A variant that can still be written but is no longer accepted on read.
    #[error("deprecated variant {0} cannot be decoded")]
    DeprecatedVariant(&'static str),

    /// A boolean byte other than 0 or 1.
    #[error("invalid bool byte {0:#04x}")]
    InvalidBool(u8),

    /// An option tag other than 0 or 1.
    #[error("invalid option tag {0:#04x}")]
    InvalidOptionTag(u8),

    /// A string was not valid UTF-8.
    #[error("invalid utf-8 in string")]
    InvalidUtf8,

    /// ULEB128 value does not fit in 32 bits.
    #[error("uleb128 value overflows u32")]
    Uleb128Overflow,

    /// ULEB128 value used more bytes than necessary.
    #[error("non-canonical uleb128 encoding")]
    NonCanonicalUleb128,

    /// A fixed-size field had the wrong length.
    #[error("invalid length for {field} (expected {expected}, got {actual})")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Input remained after a complete value was decoded.
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),

    /// A field decoded fine structurally but holds an unacceptable value.
    #[error("malformed field: {0}")]
    MalformedField(&'static str),
}
