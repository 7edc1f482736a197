use bech32::{primitives::decode::CheckedHrpstring, Bech32, Hrp};
use tracing::*;
use zeroize::Zeroizing;

use super::{Ed25519Keypair, PublicKey, Secp256k1Keypair, Signer, SECRET_KEY_LENGTH};
use crate::{
    errors::CryptoError,
    scheme::{Signature, SignatureScheme},
};

/// Human-readable prefix of exported secret keys.
pub const ROOCH_SECRET_KEY_HRP: &str = "roochsecretkey";

/// A keypair of either supported scheme.
#[derive(Debug, Clone)]
pub enum Keypair {
    Ed25519(Ed25519Keypair),
    Secp256k1(Secp256k1Keypair),
}

impl Keypair {
    pub fn generate(scheme: SignatureScheme) -> Self {
        match scheme {
            SignatureScheme::Ed25519 => Self::Ed25519(Ed25519Keypair::generate()),
            SignatureScheme::Secp256k1 => Self::Secp256k1(Secp256k1Keypair::generate()),
        }
    }

    pub fn from_secret_bytes(
        scheme: SignatureScheme,
        bytes: &[u8],
        skip_validation: bool,
    ) -> Result<Self, CryptoError> {
        let keypair = match scheme {
            SignatureScheme::Ed25519 => {
                Self::Ed25519(Ed25519Keypair::from_secret_bytes(bytes, skip_validation)?)
            }
            SignatureScheme::Secp256k1 => {
                Self::Secp256k1(Secp256k1Keypair::from_secret_bytes(bytes, skip_validation)?)
            }
        };
        debug!(%scheme, address = %keypair.to_rooch_address(), "imported keypair");
        Ok(keypair)
    }

    /// Decodes a `roochsecretkey1...` string: Bech32 over
    /// `[flag] || 32-byte secret`. The key is validated on import.
    pub fn from_bech32_secret(s: &str) -> Result<Self, CryptoError> {
        let checked = CheckedHrpstring::new::<Bech32>(s)
            .map_err(|e| CryptoError::InvalidSecretKeyEncoding(e.to_string()))?;
        let hrp = checked.hrp().to_lowercase();
        if hrp != ROOCH_SECRET_KEY_HRP {
            return Err(CryptoError::WrongSecretKeyPrefix {
                expected: ROOCH_SECRET_KEY_HRP,
                found: hrp,
            });
        }

        let payload = Zeroizing::new(checked.byte_iter().collect::<Vec<u8>>());
        let (&flag, secret) = payload
            .split_first()
            .ok_or_else(|| CryptoError::InvalidSecretKeyEncoding("empty payload".to_owned()))?;
        let scheme = SignatureScheme::from_flag(flag)?;
        if secret.len() != SECRET_KEY_LENGTH {
            return Err(CryptoError::InvalidSecretKeyLength {
                scheme,
                actual: secret.len(),
            });
        }
        Self::from_secret_bytes(scheme, secret, false)
    }

    /// Encodes the secret in the `roochsecretkey1...` export format.
    pub fn to_bech32_secret(&self) -> Result<String, CryptoError> {
        let secret = self.secret_bytes();
        let mut payload = Zeroizing::new(Vec::with_capacity(1 + SECRET_KEY_LENGTH));
        payload.push(self.scheme().flag());
        payload.extend_from_slice(secret.as_slice());
        bech32::encode::<Bech32>(Hrp::parse_unchecked(ROOCH_SECRET_KEY_HRP), &payload)
            .map_err(|e| CryptoError::InvalidSecretKeyEncoding(e.to_string()))
    }

    pub fn secret_bytes(&self) -> Zeroizing<[u8; SECRET_KEY_LENGTH]> {
        match self {
            Self::Ed25519(kp) => kp.secret_bytes(),
            Self::Secp256k1(kp) => kp.secret_bytes(),
        }
    }

    /// The Secp256k1 keypair, if this is one. Bitcoin-message
    /// authenticators need it.
    pub fn as_secp256k1(&self) -> Option<&Secp256k1Keypair> {
        match self {
            Self::Secp256k1(kp) => Some(kp),
            Self::Ed25519(_) => None,
        }
    }
}

impl Signer for Keypair {
    fn scheme(&self) -> SignatureScheme {
        match self {
            Self::Ed25519(kp) => kp.scheme(),
            Self::Secp256k1(kp) => kp.scheme(),
        }
    }

    fn sign(&self, message: &[u8]) -> Signature {
        match self {
            Self::Ed25519(kp) => kp.sign(message),
            Self::Secp256k1(kp) => kp.sign(message),
        }
    }

    fn public_key(&self) -> PublicKey {
        match self {
            Self::Ed25519(kp) => kp.public_key(),
            Self::Secp256k1(kp) => kp.public_key(),
        }
    }
}

impl From<Ed25519Keypair> for Keypair {
    fn from(kp: Ed25519Keypair) -> Self {
        Self::Ed25519(kp)
    }
}

impl From<Secp256k1Keypair> for Keypair {
    fn from(kp: Secp256k1Keypair) -> Self {
        Self::Secp256k1(kp)
    }
}
