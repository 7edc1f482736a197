//! Keypairs for the supported signature schemes.

mod ed25519;
mod keypair;
mod public_key;
mod secp256k1;

use rooch_identifiers::RoochAddress;

pub use self::{
    ed25519::Ed25519Keypair,
    keypair::{Keypair, ROOCH_SECRET_KEY_HRP},
    public_key::PublicKey,
    secp256k1::Secp256k1Keypair,
};
use crate::scheme::{Signature, SignatureScheme};

/// Message every imported keypair must be able to sign and verify.
pub const VALIDATION_MESSAGE: &[u8] = b"rooch validation";

/// Length of a raw secret key in either scheme.
pub const SECRET_KEY_LENGTH: usize = 32;

/// Signing capability shared by every keypair.
pub trait Signer {
    fn scheme(&self) -> SignatureScheme;

    fn sign(&self, message: &[u8]) -> Signature;

    fn public_key(&self) -> PublicKey;

    fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key().to_bytes()
    }

    fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.public_key().verify(message, signature)
    }

    fn to_rooch_address(&self) -> RoochAddress {
        self.public_key().to_rooch_address()
    }
}

/// Signs and verifies [`VALIDATION_MESSAGE`] with a freshly imported key.
fn validate(signer: &impl Signer, public_key: &PublicKey) -> bool {
    let signature = signer.sign(VALIDATION_MESSAGE);
    public_key.verify(VALIDATION_MESSAGE, &signature)
}
