//! Transaction authenticators.

use rooch_btc_types::BitcoinNetwork;
use rooch_codec::decode_buf_exact;
use rooch_identifiers::RoochAddress;
use tracing::*;

use crate::{
    bitcoin_message::{BitcoinAuthPayload, BitcoinSignMessage, SignWith},
    errors::CryptoError,
    keys::{PublicKey, Secp256k1Keypair, Signer},
    scheme::{Signature, SignatureScheme},
};

/// On-chain validator an authenticator is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum AuthValidatorId {
    /// Native scheme signatures.
    Rooch = 0,
    /// Bitcoin signed messages.
    Bitcoin = 1,
}

impl AuthValidatorId {
    pub fn id(self) -> u64 {
        self as u64
    }

    pub fn from_id(id: u64) -> Result<Self, CryptoError> {
        match id {
            0 => Ok(Self::Rooch),
            1 => Ok(Self::Bitcoin),
            other => Err(CryptoError::UnknownAuthValidator(other)),
        }
    }
}

/// Proof that a transaction was authorized by its sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authenticator {
    pub auth_validator_id: u64,
    pub payload: Vec<u8>,
}

rooch_codec::impl_struct_codec!(Authenticator {
    auth_validator_id,
    payload,
});

impl Authenticator {
    /// Native path: `payload = [flag] || signature || public key`.
    pub fn rooch(message: &[u8], signer: &impl Signer) -> Self {
        let signature = signer.sign(message);
        let public_key = signer.public_key_bytes();

        let mut payload = Vec::with_capacity(1 + signature.as_bytes().len() + public_key.len());
        payload.push(signer.scheme().flag());
        payload.extend_from_slice(signature.as_bytes());
        payload.extend_from_slice(&public_key);

        trace!(scheme = %signer.scheme(), "built native authenticator");
        Self {
            auth_validator_id: AuthValidatorId::Rooch.id(),
            payload,
        }
    }

    /// Bitcoin-message path. The message info must carry the transaction
    /// prefix; [`BitcoinSignMessage::new`] adds it.
    pub fn bitcoin(
        message: &BitcoinSignMessage,
        keypair: &Secp256k1Keypair,
        sign_with: SignWith,
        network: BitcoinNetwork,
    ) -> Result<Self, CryptoError> {
        if !message.has_info_prefix() {
            return Err(CryptoError::InvalidMessageInfo(
                message.message_info().to_owned(),
            ));
        }

        let signature = keypair.sign(&message.signing_bytes(sign_with));
        let from_address = keypair.bitcoin_address(network)?;
        let payload = BitcoinAuthPayload {
            signature: signature.as_bytes().to_vec(),
            message_prefix: message.message_prefix(),
            message_info: message.message_info().as_bytes().to_vec(),
            public_key: keypair.public_key_bytes(),
            from_address: from_address.as_str().as_bytes().to_vec(),
        };

        debug!(%from_address, %sign_with, "built bitcoin authenticator");
        Ok(Self {
            auth_validator_id: AuthValidatorId::Bitcoin.id(),
            payload: rooch_codec::encode_to_vec(&payload)?,
        })
    }

    pub fn validator(&self) -> Result<AuthValidatorId, CryptoError> {
        AuthValidatorId::from_id(self.auth_validator_id)
    }

    fn expect_validator(&self, expected: AuthValidatorId) -> Result<(), CryptoError> {
        if self.auth_validator_id != expected.id() {
            return Err(CryptoError::WrongAuthValidator {
                expected: expected.id(),
                found: self.auth_validator_id,
            });
        }
        Ok(())
    }

    /// Splits a native payload into its signature and public key.
    pub fn rooch_parts(&self) -> Result<(Signature, PublicKey), CryptoError> {
        self.expect_validator(AuthValidatorId::Rooch)?;
        let (&flag, rest) = self
            .payload
            .split_first()
            .ok_or(CryptoError::InvalidPayloadLength(0))?;
        let scheme = SignatureScheme::from_flag(flag)?;
        if rest.len() != scheme.signature_length() + scheme.public_key_length() {
            return Err(CryptoError::InvalidPayloadLength(self.payload.len()));
        }
        let (signature, public_key) = rest.split_at(scheme.signature_length());
        Ok((
            Signature::from_slice(scheme, signature)?,
            PublicKey::from_bytes(scheme, public_key)?,
        ))
    }

    /// Verifies a native authenticator over `message`.
    pub fn verify_rooch(&self, message: &[u8]) -> Result<PublicKey, CryptoError> {
        let (signature, public_key) = self.rooch_parts()?;
        if !public_key.verify(message, &signature) {
            return Err(CryptoError::VerificationFailed);
        }
        Ok(public_key)
    }

    pub fn bitcoin_payload(&self) -> Result<BitcoinAuthPayload, CryptoError> {
        self.expect_validator(AuthValidatorId::Bitcoin)?;
        Ok(decode_buf_exact(&self.payload)?)
    }

    /// Native address of the key that produced this authenticator.
    pub fn signer_address(&self) -> Result<RoochAddress, CryptoError> {
        let public_key = match self.validator()? {
            AuthValidatorId::Rooch => self.rooch_parts()?.1,
            AuthValidatorId::Bitcoin => PublicKey::from_bytes(
                SignatureScheme::Secp256k1,
                &self.bitcoin_payload()?.public_key,
            )?,
        };
        Ok(public_key.to_rooch_address())
    }
}
