//! Bitcoin signed-message framing of transaction hashes.

use std::{
    fmt,
    str::{self, FromStr},
};

use bitcoin::consensus::encode::{serialize, VarInt};
use rooch_btc_types::{BitcoinAddress, DEFAULT_BITCOIN_NETWORK};
use rooch_identifiers::hash::sha256;
use serde::{Deserialize, Serialize};

use crate::{
    errors::CryptoError,
    keys::PublicKey,
    scheme::{Signature, SignatureScheme},
};

/// Fixed prefix of every Bitcoin signed message, including its own length
/// byte.
pub const BITCOIN_MESSAGE_PREFIX: &str = "\x18Bitcoin Signed Message:\n";

/// Prefix every transaction message info must start with.
pub const MESSAGE_INFO_PREFIX: &str = "Rooch Transaction:\n";

/// What the key signs in the Bitcoin-message path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignWith {
    /// SHA-256 of the framed message.
    #[default]
    Hash,
    /// The framed message bytes.
    Raw,
}

impl fmt::Display for SignWith {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hash => "hash",
            Self::Raw => "raw",
        })
    }
}

impl FromStr for SignWith {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hash" => Ok(Self::Hash),
            "raw" => Ok(Self::Raw),
            other => Err(CryptoError::UnknownSignWith(other.to_owned())),
        }
    }
}

/// A transaction hash framed as a Bitcoin signed message:
///
/// ```text
/// "\x18Bitcoin Signed Message:\n" || CompactSize(len) || message_info || hex(tx_hash)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitcoinSignMessage {
    tx_hash: Vec<u8>,
    message_info: String,
}

impl BitcoinSignMessage {
    /// Builds the message, prepending [`MESSAGE_INFO_PREFIX`] and appending a
    /// trailing newline to `message_info` where missing.
    pub fn new(tx_hash: &[u8], message_info: &str) -> Self {
        let mut info = if message_info.starts_with(MESSAGE_INFO_PREFIX) {
            message_info.to_owned()
        } else {
            format!("{MESSAGE_INFO_PREFIX}{message_info}")
        };
        if !info.ends_with('\n') {
            info.push('\n');
        }
        Self::from_raw_parts(tx_hash, info)
    }

    /// Builds the message with `message_info` taken as is.
    pub fn from_raw_parts(tx_hash: &[u8], message_info: String) -> Self {
        Self {
            tx_hash: tx_hash.to_vec(),
            message_info,
        }
    }

    pub fn tx_hash(&self) -> &[u8] {
        &self.tx_hash
    }

    pub fn message_info(&self) -> &str {
        &self.message_info
    }

    pub fn has_info_prefix(&self) -> bool {
        self.message_info.starts_with(MESSAGE_INFO_PREFIX)
    }

    fn tx_hash_hex(&self) -> String {
        hex::encode(&self.tx_hash)
    }

    /// Length of the signed text after the fixed prefix.
    fn message_len(&self) -> usize {
        self.message_info.len() + self.tx_hash.len() * 2
    }

    /// [`BITCOIN_MESSAGE_PREFIX`] followed by the CompactSize message length.
    pub fn message_prefix(&self) -> Vec<u8> {
        let mut out = BITCOIN_MESSAGE_PREFIX.as_bytes().to_vec();
        out.extend(serialize(&VarInt(self.message_len() as u64)));
        out
    }

    /// The full framed message.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = self.message_prefix();
        out.extend_from_slice(self.message_info.as_bytes());
        out.extend_from_slice(self.tx_hash_hex().as_bytes());
        out
    }

    pub fn hash(&self) -> [u8; 32] {
        sha256(&self.encode())
    }

    /// The human-readable text a wallet shows: message info and hex hash.
    pub fn raw(&self) -> String {
        format!("{}{}", self.message_info, self.tx_hash_hex())
    }

    /// Bytes handed to the signing key for the given mode.
    pub fn signing_bytes(&self, sign_with: SignWith) -> Vec<u8> {
        match sign_with {
            SignWith::Hash => self.hash().to_vec(),
            SignWith::Raw => self.encode(),
        }
    }
}

/// Payload of a Bitcoin-message authenticator. Every field is a
/// length-prefixed byte string; `from_address` holds the UTF-8 text of the
/// signer's Bitcoin address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitcoinAuthPayload {
    pub signature: Vec<u8>,
    pub message_prefix: Vec<u8>,
    pub message_info: Vec<u8>,
    pub public_key: Vec<u8>,
    pub from_address: Vec<u8>,
}

rooch_codec::impl_struct_codec!(BitcoinAuthPayload {
    signature,
    message_prefix,
    message_info,
    public_key,
    from_address,
});

impl BitcoinAuthPayload {
    pub fn from_address_text(&self) -> Result<&str, CryptoError> {
        str::from_utf8(&self.from_address)
            .map_err(|_| CryptoError::InvalidFromAddress(hex::encode(&self.from_address)))
    }

    /// Checks the payload against `tx_hash`: the framing must match, the
    /// signature must verify under the embedded key and the from-address
    /// must belong to that key.
    pub fn verify(&self, tx_hash: &[u8], sign_with: SignWith) -> Result<(), CryptoError> {
        let info = String::from_utf8(self.message_info.clone()).map_err(|e| {
            CryptoError::InvalidMessageInfo(String::from_utf8_lossy(e.as_bytes()).into_owned())
        })?;
        let message = BitcoinSignMessage::from_raw_parts(tx_hash, info);
        if !message.has_info_prefix() {
            return Err(CryptoError::InvalidMessageInfo(message.message_info));
        }
        if message.message_prefix() != self.message_prefix {
            return Err(CryptoError::VerificationFailed);
        }

        let public_key = PublicKey::from_bytes(SignatureScheme::Secp256k1, &self.public_key)?;
        let signature = Signature::from_slice(SignatureScheme::Secp256k1, &self.signature)?;
        if !public_key.verify(&message.signing_bytes(sign_with), &signature) {
            return Err(CryptoError::VerificationFailed);
        }

        let from_address =
            BitcoinAddress::parse(self.from_address_text()?, DEFAULT_BITCOIN_NETWORK)?;
        if from_address.to_rooch_address() != public_key.to_rooch_address() {
            return Err(CryptoError::VerificationFailed);
        }
        Ok(())
    }
}
