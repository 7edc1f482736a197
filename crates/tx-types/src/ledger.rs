//! Ledger transaction data: L1 blocks and transactions relayed into the
//! chain, and L2 transactions.

use std::fmt;

use rooch_codec::{decode_variant_index, encode_variant_index, Codec, CodecError, Decoder, Encoder};

use crate::transaction::RoochTransaction;

/// Chain identifiers from SLIP-44, plus the native chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum MultiChainId {
    Bitcoin = 0,
    Ether = 60,
    Sui = 784,
    Nostr = 1237,
    Rooch = 20230101,
}

impl MultiChainId {
    pub fn id(self) -> u64 {
        self as u64
    }

    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            0 => Some(Self::Bitcoin),
            60 => Some(Self::Ether),
            784 => Some(Self::Sui),
            1237 => Some(Self::Nostr),
            20230101 => Some(Self::Rooch),
            _ => None,
        }
    }
}

impl fmt::Display for MultiChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bitcoin => "bitcoin",
            Self::Ether => "ether",
            Self::Sui => "sui",
            Self::Nostr => "nostr",
            Self::Rooch => "rooch",
        })
    }
}

impl Codec for MultiChainId {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.id().encode(enc)
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        Self::from_id(u64::decode(dec)?).ok_or(CodecError::MalformedField("multichain id"))
    }
}

/// An L1 block relayed into the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L1BlockData {
    pub chain_id: MultiChainId,
    pub block_height: u64,
    pub block_hash: Vec<u8>,
}

rooch_codec::impl_struct_codec!(L1BlockData {
    chain_id,
    block_height,
    block_hash,
});

/// An L1 transaction relayed into the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L1TxData {
    pub chain_id: MultiChainId,
    pub block_hash: Vec<u8>,
    pub txid: Vec<u8>,
}

rooch_codec::impl_struct_codec!(L1TxData {
    chain_id,
    block_hash,
    txid
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerTxData {
    L1Block(L1BlockData),
    L1Tx(L1TxData),
    L2Tx(RoochTransaction),
}

impl LedgerTxData {
    fn variant_index(&self) -> u32 {
        match self {
            Self::L1Block(_) => 0,
            Self::L1Tx(_) => 1,
            Self::L2Tx(_) => 2,
        }
    }
}

impl Codec for LedgerTxData {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        encode_variant_index(self.variant_index(), enc)?;
        match self {
            Self::L1Block(block) => block.encode(enc),
            Self::L1Tx(tx) => tx.encode(enc),
            Self::L2Tx(tx) => Codec::encode(tx, enc),
        }
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        match decode_variant_index(dec)? {
            0 => Ok(Self::L1Block(L1BlockData::decode(dec)?)),
            1 => Ok(Self::L1Tx(L1TxData::decode(dec)?)),
            2 => Ok(Self::L2Tx(Codec::decode(dec)?)),
            index => Err(CodecError::UnknownVariant {
                ty: "LedgerTxData",
                index,
            }),
        }
    }
}
