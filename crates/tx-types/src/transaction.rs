//! Transaction data and signed transactions.

use rooch_btc_types::BitcoinNetwork;
use rooch_codec::{decode_buf_exact, encode_to_vec, CodecError};
use rooch_crypto::{
    AuthValidatorId, Authenticator, BitcoinSignMessage, Secp256k1Keypair, SignWith, Signer,
};
use rooch_identifiers::{RoochAddress, H256};
use tracing::*;

use crate::{action::MoveAction, errors::TxTypeError};

/// Gas limit used when the caller does not pick one.
pub const DEFAULT_MAX_GAS_AMOUNT: u64 = 50_000_000;

/// The signed part of a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionData {
    pub sender: RoochAddress,
    pub sequence_number: u64,
    pub chain_id: u64,
    pub max_gas_amount: u64,
    pub action: MoveAction,
}

rooch_codec::impl_struct_codec!(TransactionData {
    sender,
    sequence_number,
    chain_id,
    max_gas_amount,
    action,
});

impl TransactionData {
    pub fn new(
        sender: RoochAddress,
        sequence_number: u64,
        chain_id: u64,
        max_gas_amount: u64,
        action: MoveAction,
    ) -> Self {
        Self {
            sender,
            sequence_number,
            chain_id,
            max_gas_amount,
            action,
        }
    }

    /// Builds a function-call transaction with [`DEFAULT_MAX_GAS_AMOUNT`].
    pub fn new_function_call(
        sender: RoochAddress,
        sequence_number: u64,
        chain_id: u64,
        action: MoveAction,
    ) -> Self {
        Self::new(
            sender,
            sequence_number,
            chain_id,
            DEFAULT_MAX_GAS_AMOUNT,
            action,
        )
    }

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        encode_to_vec(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        decode_buf_exact(bytes)
    }

    /// SHA3-256 of the full encoding. This is what authenticators sign.
    pub fn hash(&self) -> Result<H256, CodecError> {
        Ok(H256::sha3_256(&self.encode()?))
    }
}

/// Transaction data together with its authenticator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoochTransaction {
    pub data: TransactionData,
    pub authenticator: Authenticator,
}

rooch_codec::impl_struct_codec!(RoochTransaction {
    data,
    authenticator
});

impl RoochTransaction {
    pub fn new(data: TransactionData, authenticator: Authenticator) -> Self {
        Self {
            data,
            authenticator,
        }
    }

    /// Signs `data` with a native-scheme authenticator.
    pub fn sign_rooch(data: TransactionData, signer: &impl Signer) -> Result<Self, TxTypeError> {
        check_sender(&data, signer.to_rooch_address())?;
        let hash = data.hash()?;
        let authenticator = Authenticator::rooch(hash.as_bytes(), signer);
        debug!(%hash, sender = %data.sender, "signed transaction");
        Ok(Self::new(data, authenticator))
    }

    /// Signs `data` as a Bitcoin message. `message_info` is normalized to
    /// carry the transaction prefix and a trailing newline.
    pub fn sign_bitcoin(
        data: TransactionData,
        keypair: &Secp256k1Keypair,
        message_info: &str,
        sign_with: SignWith,
        network: BitcoinNetwork,
    ) -> Result<Self, TxTypeError> {
        check_sender(&data, keypair.to_rooch_address())?;
        let hash = data.hash()?;
        let message = BitcoinSignMessage::new(hash.as_bytes(), message_info);
        let authenticator = Authenticator::bitcoin(&message, keypair, sign_with, network)?;
        debug!(%hash, sender = %data.sender, %sign_with, "signed transaction as bitcoin message");
        Ok(Self::new(data, authenticator))
    }

    pub fn sender(&self) -> RoochAddress {
        self.data.sender
    }

    /// Hash of the transaction data.
    pub fn hash(&self) -> Result<H256, CodecError> {
        self.data.hash()
    }

    /// Checks the authenticator against the data hash and the sender.
    /// `sign_with` only matters for Bitcoin-message authenticators.
    pub fn verify(&self, sign_with: SignWith) -> Result<(), TxTypeError> {
        let hash = self.hash()?;
        match self.authenticator.validator()? {
            AuthValidatorId::Rooch => {
                self.authenticator.verify_rooch(hash.as_bytes())?;
            }
            AuthValidatorId::Bitcoin => {
                self.authenticator
                    .bitcoin_payload()?
                    .verify(hash.as_bytes(), sign_with)?;
            }
        }
        check_sender(&self.data, self.authenticator.signer_address()?)
    }

    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        encode_to_vec(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        decode_buf_exact(bytes)
    }

    /// `0x`-prefixed hex of the encoding, the form submitted over RPC.
    pub fn encode_hex(&self) -> Result<String, CodecError> {
        Ok(format!("0x{}", hex::encode(self.encode()?)))
    }

    /// Inverse of [`Self::encode_hex`]; the `0x` prefix is optional.
    pub fn decode_hex(s: &str) -> Result<Self, TxTypeError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| TxTypeError::InvalidHex(e.to_string()))?;
        Ok(Self::decode(&bytes)?)
    }
}

fn check_sender(data: &TransactionData, signer: RoochAddress) -> Result<(), TxTypeError> {
    if data.sender != signer {
        return Err(TxTypeError::SenderMismatch {
            sender: data.sender,
            signer,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rooch_crypto::{Ed25519Keypair, Keypair, SignatureScheme};

    use super::*;
    use crate::{action::tests::arb_move_action, args::MoveArg};

    fn arb_transaction_data() -> impl Strategy<Value = TransactionData> {
        (
            any::<[u8; 32]>(),
            any::<u64>(),
            any::<u64>(),
            any::<u64>(),
            arb_move_action(),
        )
            .prop_map(|(sender, seq, chain_id, gas, action)| {
                TransactionData::new(RoochAddress::new(sender), seq, chain_id, gas, action)
            })
    }

    fn transfer(sender: RoochAddress) -> TransactionData {
        let action = MoveAction::new_function_call(
            "0x3::transfer::transfer_coin".parse().unwrap(),
            vec!["0x3::gas_coin::RGas".parse().unwrap()],
            vec![MoveArg::address(RoochAddress::FOUR), MoveArg::u256(100u8.into())],
        );
        TransactionData::new_function_call(sender, 0, 4, action)
    }

    #[test]
    fn test_default_gas() {
        let data = transfer(RoochAddress::ONE);
        assert_eq!(data.max_gas_amount, 50_000_000);
    }

    #[test]
    fn test_hash_is_sha3_of_encoding() {
        let data = transfer(RoochAddress::ONE);
        let encoded = data.encode().unwrap();
        assert_eq!(data.hash().unwrap(), H256::sha3_256(&encoded));

        let mut other = data.clone();
        other.sequence_number += 1;
        assert_ne!(other.hash().unwrap(), data.hash().unwrap());
    }

    #[test]
    fn test_data_layout_prefix() {
        let data = transfer(RoochAddress::ONE);
        let encoded = data.encode().unwrap();
        assert_eq!(&encoded[..32], RoochAddress::ONE.as_bytes());
        assert_eq!(&encoded[32..40], 0u64.to_le_bytes());
        assert_eq!(&encoded[40..48], 4u64.to_le_bytes());
        assert_eq!(&encoded[48..56], 50_000_000u64.to_le_bytes());
        assert_eq!(encoded[56], 1);
    }

    #[test]
    fn test_sign_rooch_and_verify() {
        for scheme in [SignatureScheme::Ed25519, SignatureScheme::Secp256k1] {
            let keypair = Keypair::generate(scheme);
            let tx = RoochTransaction::sign_rooch(transfer(keypair.to_rooch_address()), &keypair)
                .unwrap();
            assert_eq!(tx.authenticator.auth_validator_id, 0);
            tx.verify(SignWith::Hash).unwrap();

            let hex = tx.encode_hex().unwrap();
            assert!(hex.starts_with("0x"));
            assert_eq!(RoochTransaction::decode_hex(&hex).unwrap(), tx);
        }
    }

    #[test]
    fn test_sign_bitcoin_and_verify() {
        let keypair = Secp256k1Keypair::from_secret_bytes(&[0x33; 32], false).unwrap();
        let data = transfer(keypair.to_rooch_address());
        let tx = RoochTransaction::sign_bitcoin(
            data,
            &keypair,
            "transfer",
            SignWith::Hash,
            BitcoinNetwork::Testnet,
        )
        .unwrap();
        assert_eq!(tx.authenticator.auth_validator_id, 1);
        tx.verify(SignWith::Hash).unwrap();
        assert!(tx.verify(SignWith::Raw).is_err());
    }

    #[test]
    fn test_sender_mismatch() {
        let keypair = Ed25519Keypair::generate();
        let err = RoochTransaction::sign_rooch(transfer(RoochAddress::ONE), &keypair).unwrap_err();
        assert!(matches!(err, TxTypeError::SenderMismatch { .. }));
    }

    #[test]
    fn test_tampered_transaction_fails() {
        let keypair = Ed25519Keypair::generate();
        let mut tx =
            RoochTransaction::sign_rooch(transfer(keypair.to_rooch_address()), &keypair).unwrap();
        tx.data.sequence_number = 9;
        assert!(tx.verify(SignWith::Hash).is_err());
    }

    #[test]
    fn test_decode_hex_errors() {
        assert!(matches!(
            RoochTransaction::decode_hex("0xzz"),
            Err(TxTypeError::InvalidHex(_))
        ));
        assert!(matches!(
            RoochTransaction::decode_hex("0x00"),
            Err(TxTypeError::Codec(_))
        ));
    }

    proptest! {
        #[test]
        fn proptest_transaction_data_codec(data in arb_transaction_data()) {
            let encoded = data.encode().unwrap();
            prop_assert_eq!(TransactionData::decode(&encoded).unwrap(), data);
        }

        #[test]
        fn proptest_trailing_bytes_rejected(data in arb_transaction_data(), extra in any::<u8>()) {
            let mut encoded = data.encode().unwrap();
            encoded.push(extra);
            prop_assert!(TransactionData::decode(&encoded).is_err());
        }
    }
}
