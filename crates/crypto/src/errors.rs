use rooch_btc_types::BitcoinAddressError;
use rooch_codec::CodecError;
use thiserror::Error;

use crate::scheme::SignatureScheme;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("unknown signature scheme flag {0}")]
    UnknownSchemeFlag(u8),

    #[error("unknown signature scheme '{0}'")]
    UnknownScheme(String),

    #[error("invalid {scheme} secret key length {actual}")]
    InvalidSecretKeyLength {
        scheme: SignatureScheme,
        actual: usize,
    },

    #[error("invalid {scheme} public key length: expected {expected}, got {actual}")]
    InvalidPublicKeyLength {
        scheme: SignatureScheme,
        expected: usize,
        actual: usize,
    },

    #[error("invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    #[error("invalid {0} key: {1}")]
    InvalidKey(SignatureScheme, String),

    /// The keypair failed to verify its own signature over the validation
    /// message.
    #[error("{0} secret key failed self-verification")]
    Validation(SignatureScheme),

    #[error("invalid secret key encoding: {0}")]
    InvalidSecretKeyEncoding(String),

    #[error("wrong secret key prefix: expected '{expected}', found '{found}'")]
    WrongSecretKeyPrefix {
        expected: &'static str,
        found: String,
    },

    #[error("message info {0:?} does not start with the transaction prefix")]
    InvalidMessageInfo(String),

    #[error("from address 0x{0} is not UTF-8 text")]
    InvalidFromAddress(String),

    #[error("unknown sign mode '{0}'")]
    UnknownSignWith(String),

    #[error("unknown auth validator id {0}")]
    UnknownAuthValidator(u64),

    #[error("authenticator has validator id {found}, expected {expected}")]
    WrongAuthValidator { expected: u64, found: u64 },

    #[error("invalid authenticator payload length {0}")]
    InvalidPayloadLength(usize),

    #[error("signature verification failed")]
    VerificationFailed,

    #[error("bitcoin address: {0}")]
    BitcoinAddress(#[from] BitcoinAddressError),

    #[error("codec: {0}")]
    Codec(#[from] CodecError),
}
