use std::fmt;

use ed25519_dalek::{Signer as _, SigningKey};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

use super::{validate, PublicKey, Signer, SECRET_KEY_LENGTH};
use crate::{
    errors::CryptoError,
    scheme::{Signature, SignatureScheme},
};

/// Older exports carry `seed || public key`.
const LEGACY_SECRET_KEY_LENGTH: usize = 64;

/// Ed25519 keypair. Signs the message directly, with no pre-hash.
#[derive(Clone)]
pub struct Ed25519Keypair {
    signing_key: SigningKey,
}

impl Ed25519Keypair {
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Imports a 32-byte seed, or a legacy 64-byte `seed || public key`
    /// export. Unless `skip_validation` is set the key must verify its own
    /// signature over the validation message; for the legacy form the
    /// verification uses the embedded public key, so a mismatched key is
    /// rejected.
    pub fn from_secret_bytes(bytes: &[u8], skip_validation: bool) -> Result<Self, CryptoError> {
        let (seed, embedded) = match bytes.len() {
            SECRET_KEY_LENGTH => (bytes, None),
            LEGACY_SECRET_KEY_LENGTH => {
                let (seed, public) = bytes.split_at(SECRET_KEY_LENGTH);
                (seed, Some(public))
            }
            actual => {
                return Err(CryptoError::InvalidSecretKeyLength {
                    scheme: SignatureScheme::Ed25519,
                    actual,
                })
            }
        };

        let mut secret = Zeroizing::new([0; SECRET_KEY_LENGTH]);
        secret.copy_from_slice(seed);
        let keypair = Self {
            signing_key: SigningKey::from_bytes(&secret),
        };

        if !skip_validation {
            let public_key = match embedded {
                Some(public) => PublicKey::from_bytes(SignatureScheme::Ed25519, public)?,
                None => keypair.public_key(),
            };
            if !validate(&keypair, &public_key) {
                return Err(CryptoError::Validation(SignatureScheme::Ed25519));
            }
        }
        Ok(keypair)
    }

    /// The 32-byte seed.
    pub fn secret_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LENGTH]> {
        Zeroizing::new(self.signing_key.to_bytes())
    }
}

impl Signer for Ed25519Keypair {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }

    fn sign(&self, message: &[u8]) -> Signature {
        let signature = self.signing_key.sign(message);
        Signature::new(SignatureScheme::Ed25519, signature.to_bytes())
    }

    fn public_key(&self) -> PublicKey {
        PublicKey::Ed25519(self.signing_key.verifying_key())
    }
}

impl fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Keypair")
            .field("public_key", &self.public_key().to_hex())
            .finish_non_exhaustive()
    }
}
