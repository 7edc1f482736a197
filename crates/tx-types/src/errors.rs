use rooch_codec::CodecError;
use rooch_crypto::CryptoError;
use rooch_identifiers::{AddressError, RoochAddress};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxTypeError {
    #[error("invalid identifier {0:?}")]
    InvalidIdentifier(String),

    #[error("invalid type tag {input:?}: {reason}")]
    InvalidTypeTag { input: String, reason: &'static str },

    #[error("invalid module id {0:?}")]
    InvalidModuleId(String),

    #[error("invalid function id {0:?}")]
    InvalidFunctionId(String),

    #[error("invalid transaction hex: {0}")]
    InvalidHex(String),

    /// The authenticator was produced by a key that does not own the sender
    /// account.
    #[error("transaction sender {sender} does not match signer {signer}")]
    SenderMismatch {
        sender: RoochAddress,
        signer: RoochAddress,
    },

    #[error("address: {0}")]
    Address(#[from] AddressError),

    #[error("codec: {0}")]
    Codec(#[from] CodecError),

    #[error("crypto: {0}")]
    Crypto(#[from] CryptoError),
}
