use std::fmt;

use rand::{rngs::OsRng, RngCore};
use rooch_btc_types::{AddressView, BitcoinAddress, BitcoinNetwork, NostrAddress};
use rooch_identifiers::hash::sha256;
use secp256k1::{Message, PublicKey as EcdsaPublicKey, SecretKey, SECP256K1};
use zeroize::Zeroizing;

use super::{validate, PublicKey, Signer, SECRET_KEY_LENGTH};
use crate::{
    errors::CryptoError,
    scheme::{Signature, SignatureScheme},
};

/// Secp256k1 keypair. Produces 64-byte compact ECDSA signatures over the
/// SHA-256 digest of the message.
#[derive(Clone)]
pub struct Secp256k1Keypair {
    secret_key: SecretKey,
    public_key: EcdsaPublicKey,
}

impl Secp256k1Keypair {
    pub fn generate() -> Self {
        let mut rng = OsRng;
        loop {
            let mut bytes = Zeroizing::new([0; SECRET_KEY_LENGTH]);
            rng.fill_bytes(bytes.as_mut_slice());
            // Out-of-range scalars are astronomically rare; draw again.
            if let Ok(secret_key) = SecretKey::from_slice(bytes.as_slice()) {
                return Self::from_secret_key(secret_key);
            }
        }
    }

    /// Imports a 32-byte secret. Unless `skip_validation` is set the key must
    /// verify its own signature over the validation message.
    pub fn from_secret_bytes(bytes: &[u8], skip_validation: bool) -> Result<Self, CryptoError> {
        if bytes.len() != SECRET_KEY_LENGTH {
            return Err(CryptoError::InvalidSecretKeyLength {
                scheme: SignatureScheme::Secp256k1,
                actual: bytes.len(),
            });
        }
        let secret_key = SecretKey::from_slice(bytes)
            .map_err(|e| CryptoError::InvalidKey(SignatureScheme::Secp256k1, e.to_string()))?;
        let keypair = Self::from_secret_key(secret_key);
        if !skip_validation && !validate(&keypair, &keypair.public_key()) {
            return Err(CryptoError::Validation(SignatureScheme::Secp256k1));
        }
        Ok(keypair)
    }

    fn from_secret_key(secret_key: SecretKey) -> Self {
        Self {
            public_key: secret_key.public_key(SECP256K1),
            secret_key,
        }
    }

    pub fn secret_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LENGTH]> {
        Zeroizing::new(self.secret_key.secret_bytes())
    }

    /// Key-path taproot address of the public key.
    pub fn bitcoin_address(&self, network: BitcoinNetwork) -> Result<BitcoinAddress, CryptoError> {
        Ok(BitcoinAddress::from_public_key(
            &self.public_key.serialize(),
            network,
        )?)
    }

    pub fn nostr_address(&self) -> Result<NostrAddress, CryptoError> {
        Ok(NostrAddress::from_public_key(&self.public_key.serialize())?)
    }

    pub fn address_view(&self, network: BitcoinNetwork) -> Result<AddressView, CryptoError> {
        Ok(AddressView::from_public_key_with_network(
            &self.public_key.serialize(),
            network,
        )?)
    }
}

impl Signer for Secp256k1Keypair {
    fn scheme(&self) -> SignatureScheme {
        SignatureScheme::Secp256k1
    }

    fn sign(&self, message: &[u8]) -> Signature {
        let digest = Message::from_digest(sha256(message));
        let signature = SECP256K1.sign_ecdsa(&digest, &self.secret_key);
        Signature::new(SignatureScheme::Secp256k1, signature.serialize_compact())
    }

    fn public_key(&self) -> PublicKey {
        PublicKey::Secp256k1(self.public_key)
    }
}

impl Drop for Secp256k1Keypair {
    fn drop(&mut self) {
        self.secret_key.non_secure_erase();
    }
}

impl fmt::Debug for Secp256k1Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1Keypair")
            .field("public_key", &hex::encode(self.public_key.serialize()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use secp256k1::{constants::CURVE_ORDER, ecdsa};

    use super::*;

    fn keypair() -> Secp256k1Keypair {
        Secp256k1Keypair::from_secret_bytes(&[0x11; 32], false).unwrap()
    }

    #[test]
    fn test_signs_sha256_digest() {
        let keypair = keypair();
        let signature = keypair.sign(b"hello");

        let digest = Message::from_digest(sha256(b"hello"));
        let raw = ecdsa::Signature::from_compact(signature.as_bytes()).unwrap();
        assert!(SECP256K1
            .verify_ecdsa(&digest, &raw, &keypair.public_key)
            .is_ok());
        assert!(keypair.verify(b"hello", &signature));
        assert!(!keypair.verify(b"hell0", &signature));
    }

    #[test]
    fn test_verify_accepts_high_s() {
        let keypair = keypair();
        let signature = keypair.sign(b"hello");

        // Negate s: (r, n - s) is the same signature in high-S form.
        let mut bytes = *signature.as_bytes();
        let mut borrow = 0i16;
        for i in (0..32).rev() {
            let diff = CURVE_ORDER[i] as i16 - bytes[32 + i] as i16 - borrow;
            bytes[32 + i] = diff.rem_euclid(256) as u8;
            borrow = i16::from(diff < 0);
        }
        let high_s = Signature::new(SignatureScheme::Secp256k1, bytes);
        assert_ne!(high_s, signature);
        assert!(keypair.verify(b"hello", &high_s));
    }

    #[test]
    fn test_invalid_secret_rejected() {
        assert!(matches!(
            Secp256k1Keypair::from_secret_bytes(&[0; 32], false),
            Err(CryptoError::InvalidKey(SignatureScheme::Secp256k1, _))
        ));
        assert!(matches!(
            Secp256k1Keypair::from_secret_bytes(&[1; 33], false),
            Err(CryptoError::InvalidSecretKeyLength { actual: 33, .. })
        ));
    }

    #[test]
    fn test_addresses_agree() {
        let keypair = Secp256k1Keypair::generate();
        let view = keypair.address_view(BitcoinNetwork::Bitcoin).unwrap();
        assert_eq!(view.rooch_address, keypair.to_rooch_address());
        assert_eq!(
            keypair
                .bitcoin_address(BitcoinNetwork::Regtest)
                .unwrap()
                .to_rooch_address(),
            keypair.to_rooch_address()
        );
        assert_eq!(
            keypair.nostr_address().unwrap().to_rooch_address(),
            keypair.to_rooch_address()
        );
        assert!(view.bitcoin_address.as_str().starts_with("bc1p"));
    }
}
