//! Signature schemes, keypairs and the authenticators that attach them to
//! transactions.

mod authenticator;
mod bitcoin_message;
mod errors;
mod keys;
mod scheme;

pub use authenticator::{AuthValidatorId, Authenticator};
pub use bitcoin_message::{
    BitcoinAuthPayload, BitcoinSignMessage, SignWith, BITCOIN_MESSAGE_PREFIX,
    MESSAGE_INFO_PREFIX,
};
pub use errors::CryptoError;
pub use keys::{
    Ed25519Keypair, Keypair, PublicKey, Secp256k1Keypair, Signer, ROOCH_SECRET_KEY_HRP,
    SECRET_KEY_LENGTH, VALIDATION_MESSAGE,
};
pub use scheme::{Signature, SignatureScheme, SIGNATURE_LENGTH};
