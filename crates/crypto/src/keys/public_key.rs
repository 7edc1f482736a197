use std::fmt;

use ed25519_dalek::{Signature as Ed25519Signature, Verifier, VerifyingKey};
use rooch_btc_types::taproot_rooch_address;
use rooch_identifiers::{hash::sha256, RoochAddress};
use secp256k1::{ecdsa, Message, PublicKey as EcdsaPublicKey, SECP256K1};

use crate::{
    errors::CryptoError,
    scheme::{Signature, SignatureScheme},
};

/// Public half of a [`Keypair`](super::Keypair).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum PublicKey {
    Ed25519(VerifyingKey),
    Secp256k1(EcdsaPublicKey),
}

impl PublicKey {
    pub fn scheme(&self) -> SignatureScheme {
        match self {
            Self::Ed25519(_) => SignatureScheme::Ed25519,
            Self::Secp256k1(_) => SignatureScheme::Secp256k1,
        }
    }

    /// Raw key bytes; Secp256k1 keys are in compressed form.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Ed25519(key) => key.to_bytes().to_vec(),
            Self::Secp256k1(key) => key.serialize().to_vec(),
        }
    }

    pub fn from_bytes(scheme: SignatureScheme, bytes: &[u8]) -> Result<Self, CryptoError> {
        let expected = scheme.public_key_length();
        if bytes.len() != expected {
            return Err(CryptoError::InvalidPublicKeyLength {
                scheme,
                expected,
                actual: bytes.len(),
            });
        }
        match scheme {
            SignatureScheme::Ed25519 => {
                let mut arr = [0; 32];
                arr.copy_from_slice(bytes);
                VerifyingKey::from_bytes(&arr)
                    .map(Self::Ed25519)
                    .map_err(|e| CryptoError::InvalidKey(scheme, e.to_string()))
            }
            SignatureScheme::Secp256k1 => EcdsaPublicKey::from_slice(bytes)
                .map(Self::Secp256k1)
                .map_err(|e| CryptoError::InvalidKey(scheme, e.to_string())),
        }
    }

    /// Parses `[flag] || key bytes`.
    pub fn from_flagged_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let (&flag, key) = bytes
            .split_first()
            .ok_or(CryptoError::InvalidPayloadLength(0))?;
        Self::from_bytes(SignatureScheme::from_flag(flag)?, key)
    }

    /// Verifies `signature` over `message`. Secp256k1 signatures are checked
    /// against the SHA-256 digest of the message, Ed25519 ones against the
    /// message itself. A signature from the other scheme never verifies.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        if signature.scheme() != self.scheme() {
            return false;
        }
        match self {
            Self::Ed25519(key) => {
                let signature = Ed25519Signature::from_bytes(signature.as_bytes());
                key.verify(message, &signature).is_ok()
            }
            Self::Secp256k1(key) => {
                let Ok(mut signature) = ecdsa::Signature::from_compact(signature.as_bytes()) else {
                    return false;
                };
                signature.normalize_s();
                let digest = Message::from_digest(sha256(message));
                SECP256K1.verify_ecdsa(&digest, &signature, key).is_ok()
            }
        }
    }

    /// Native address of the key.
    ///
    /// Ed25519 keys hash `[size byte] || key`. Secp256k1 keys go through their
    /// key-path taproot address, the form the Bitcoin validator checks
    /// senders against.
    pub fn to_rooch_address(&self) -> RoochAddress {
        match self {
            Self::Ed25519(key) => RoochAddress::from_key_material(
                SignatureScheme::Ed25519.address_size_byte(),
                key.as_bytes(),
            ),
            Self::Secp256k1(key) => taproot_rooch_address(key.x_only_public_key().0),
        }
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({}, {})", self.scheme(), self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
