//! Bitcoin address codec: base58check (P2PKH, P2SH), bech32 (segwit v0) and
//! bech32m (taproot).

use std::{fmt, sync::OnceLock};

use bech32::{primitives::decode::CheckedHrpstring, segwit, Bech32, Bech32m, Fe32, Hrp};
use bitcoin::{base58, key::TapTweak};
use rooch_identifiers::{hash::blake2b_256, RoochAddress};
use secp256k1::{PublicKey, XOnlyPublicKey, SECP256K1};
use serde::{Serialize, Serializer};

use crate::{errors::BitcoinAddressError, network::BitcoinNetwork};

pub const MIN_ADDRESS_LEN: usize = 14;
pub const MAX_ADDRESS_LEN: usize = 74;

/// Address family, also the first byte of the wrapped encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BitcoinAddressType {
    PubkeyHash = 0,
    ScriptHash = 1,
    Witness = 2,
}

impl BitcoinAddressType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::PubkeyHash),
            1 => Some(Self::ScriptHash),
            2 => Some(Self::Witness),
            _ => None,
        }
    }
}

/// A parsed Bitcoin address.
///
/// The derived native address is computed on first use and cached; the cache
/// is a [`OnceLock`] so shared instances can be used from several threads.
#[derive(Debug, Clone)]
pub struct BitcoinAddress {
    text: String,
    network: BitcoinNetwork,
    addr_type: BitcoinAddressType,
    witness_version: Option<u8>,
    payload: Vec<u8>,
    rooch_address: OnceLock<RoochAddress>,
}

impl BitcoinAddress {
    /// Parses address text. Segwit prefixes and base58 version bytes identify
    /// the network themselves; `network` only disambiguates test networks that
    /// share a prefix.
    pub fn parse(text: &str, network: BitcoinNetwork) -> Result<Self, BitcoinAddressError> {
        if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&text.len()) {
            return Err(BitcoinAddressError::InvalidLength(text.len()));
        }

        if let Some((checked, is_bech32m)) = decode_bech32(text) {
            return Self::from_checked_bech32(text, checked, is_bech32m, network);
        }
        Self::from_base58(text, network)
    }

    fn from_checked_bech32(
        text: &str,
        mut checked: CheckedHrpstring<'_>,
        is_bech32m: bool,
        hint: BitcoinNetwork,
    ) -> Result<Self, BitcoinAddressError> {
        let hrp = checked.hrp().to_lowercase();
        let network = BitcoinNetwork::from_hrp(&hrp, hint)
            .ok_or(BitcoinAddressError::UnknownHrp(hrp))?;
        let version = checked
            .remove_witness_version()
            .ok_or(BitcoinAddressError::MissingWitnessVersion)?
            .to_u8();
        validate_padding(text, checked.data_part_ascii_no_checksum())?;
        let program: Vec<u8> = checked.byte_iter().collect();

        validate_witness(version, &program)?;
        if is_bech32m != (version != 0) {
            return Err(BitcoinAddressError::ChecksumVariantMismatch(version));
        }

        Ok(Self::new_unchecked(
            text.to_owned(),
            network,
            BitcoinAddressType::Witness,
            Some(version),
            program,
        ))
    }

    fn from_base58(text: &str, hint: BitcoinNetwork) -> Result<Self, BitcoinAddressError> {
        let decoded =
            base58::decode_check(text).map_err(|e| BitcoinAddressError::InvalidBase58 {
                input: text.to_owned(),
                reason: e.to_string(),
            })?;
        if decoded.len() != 21 {
            return Err(BitcoinAddressError::InvalidBase58PayloadLength(decoded.len()));
        }

        let prefix = decoded[0];
        let network = BitcoinNetwork::from_base58_prefix(prefix, hint)
            .ok_or(BitcoinAddressError::UnknownVersionByte(prefix))?;
        let addr_type = if prefix == network.pubkey_address_prefix() {
            BitcoinAddressType::PubkeyHash
        } else {
            BitcoinAddressType::ScriptHash
        };

        Ok(Self::new_unchecked(
            text.to_owned(),
            network,
            addr_type,
            None,
            decoded[1..].to_vec(),
        ))
    }

    /// Key-path taproot address of a Secp256k1 public key (33-byte compressed
    /// or 32-byte x-only), with no script tree.
    pub fn from_public_key(
        public_key: &[u8],
        network: BitcoinNetwork,
    ) -> Result<Self, BitcoinAddressError> {
        let internal_key = x_only_public_key(public_key)?;
        let program = taproot_output_key(internal_key);
        Self::from_witness_program(1, program.to_vec(), network)
    }

    /// Builds a segwit address from its version and program.
    pub fn from_witness_program(
        version: u8,
        program: Vec<u8>,
        network: BitcoinNetwork,
    ) -> Result<Self, BitcoinAddressError> {
        validate_witness(version, &program)?;
        let fe = Fe32::try_from(version)
            .map_err(|_| BitcoinAddressError::UnsupportedWitnessVersion(version))?;
        let text = segwit::encode(Hrp::parse_unchecked(network.hrp()), fe, &program)
            .map_err(|e| BitcoinAddressError::Encoding(e.to_string()))?;
        Ok(Self::new_unchecked(
            text,
            network,
            BitcoinAddressType::Witness,
            Some(version),
            program,
        ))
    }

    /// Rebuilds an address from its wrapped bytes (see [`Self::wrapped_bytes`]).
    pub fn from_wrapped_bytes(
        bytes: &[u8],
        network: BitcoinNetwork,
    ) -> Result<Self, BitcoinAddressError> {
        let (&type_byte, rest) = bytes
            .split_first()
            .ok_or(BitcoinAddressError::InvalidWrappedBytes("empty input"))?;
        let addr_type = BitcoinAddressType::from_u8(type_byte)
            .ok_or(BitcoinAddressError::InvalidWrappedBytes("unknown address type"))?;

        let prefix = match addr_type {
            BitcoinAddressType::PubkeyHash => network.pubkey_address_prefix(),
            BitcoinAddressType::ScriptHash => network.script_address_prefix(),
            BitcoinAddressType::Witness => {
                let (&version, program) = rest
                    .split_first()
                    .ok_or(BitcoinAddressError::InvalidWrappedBytes("missing witness version"))?;
                return Self::from_witness_program(version, program.to_vec(), network);
            }
        };

        if rest.len() != 20 {
            return Err(BitcoinAddressError::InvalidWrappedBytes(
                "hash payload must be 20 bytes",
            ));
        }
        let mut versioned = Vec::with_capacity(21);
        versioned.push(prefix);
        versioned.extend_from_slice(rest);
        Ok(Self::new_unchecked(
            base58::encode_check(&versioned),
            network,
            addr_type,
            None,
            rest.to_vec(),
        ))
    }

    /// Hex form of [`Self::from_wrapped_bytes`], with or without `0x`.
    pub fn from_wrapped_hex(s: &str, network: BitcoinNetwork) -> Result<Self, BitcoinAddressError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| BitcoinAddressError::InvalidHex {
            input: s.to_owned(),
            reason: e.to_string(),
        })?;
        Self::from_wrapped_bytes(&bytes, network)
    }

    fn new_unchecked(
        text: String,
        network: BitcoinNetwork,
        addr_type: BitcoinAddressType,
        witness_version: Option<u8>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            text,
            network,
            addr_type,
            witness_version,
            payload,
            rooch_address: OnceLock::new(),
        }
    }

    pub fn network(&self) -> BitcoinNetwork {
        self.network
    }

    pub fn addr_type(&self) -> BitcoinAddressType {
        self.addr_type
    }

    pub fn witness_version(&self) -> Option<u8> {
        self.witness_version
    }

    /// Hash (P2PKH, P2SH) or witness program bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// `[type] || hash` for base58 addresses, `[type, version] || program`
    /// for segwit ones. This is the input to native address derivation.
    pub fn wrapped_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.payload.len() + 2);
        out.push(self.addr_type as u8);
        if let Some(version) = self.witness_version {
            out.push(version);
        }
        out.extend_from_slice(&self.payload);
        out
    }

    /// Native address `blake2b-256(wrapped bytes)`, computed once.
    pub fn to_rooch_address(&self) -> RoochAddress {
        *self
            .rooch_address
            .get_or_init(|| RoochAddress::new(blake2b_256(&self.wrapped_bytes())))
    }
}

impl PartialEq for BitcoinAddress {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network
            && self.addr_type == other.addr_type
            && self.witness_version == other.witness_version
            && self.payload == other.payload
    }
}

impl Eq for BitcoinAddress {}

impl fmt::Display for BitcoinAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for BitcoinAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

fn decode_bech32(text: &str) -> Option<(CheckedHrpstring<'_>, bool)> {
    if let Ok(checked) = CheckedHrpstring::new::<Bech32m>(text) {
        return Some((checked, true));
    }
    CheckedHrpstring::new::<Bech32>(text)
        .ok()
        .map(|checked| (checked, false))
}

/// The 5-bit groups of a witness program may end in at most 4 padding bits,
/// all zero. `byte_iter` drops padding silently, so this runs first.
fn validate_padding(text: &str, data: &[u8]) -> Result<(), BitcoinAddressError> {
    let padding = (data.len() * 5) % 8;
    let last = match data.last() {
        Some(&c) => Fe32::from_char(char::from(c))
            .map_err(|_| BitcoinAddressError::InvalidPadding(text.to_owned()))?
            .to_u8(),
        None => 0,
    };
    if padding > 4 || last & ((1 << padding) - 1) != 0 {
        return Err(BitcoinAddressError::InvalidPadding(text.to_owned()));
    }
    Ok(())
}

/// Version 0 programs are 20 or 32 bytes, version 1 programs exactly 32;
/// later versions are not supported.
fn validate_witness(version: u8, program: &[u8]) -> Result<(), BitcoinAddressError> {
    let ok = match version {
        0 => program.len() == 20 || program.len() == 32,
        1 => program.len() == 32,
        _ => return Err(BitcoinAddressError::UnsupportedWitnessVersion(version)),
    };
    if !ok {
        return Err(BitcoinAddressError::InvalidWitnessProgramLength {
            version,
            length: program.len(),
        });
    }
    Ok(())
}

/// BIP-86 output key: the internal key tweaked with an empty script tree.
pub(crate) fn taproot_output_key(internal_key: XOnlyPublicKey) -> [u8; 32] {
    let (output_key, _parity) = internal_key.tap_tweak(SECP256K1, None);
    output_key.to_x_only_public_key().serialize()
}

/// Wrapped bytes of the taproot address for `internal_key`.
pub(crate) fn taproot_wrapped_bytes(internal_key: XOnlyPublicKey) -> Vec<u8> {
    let mut out = vec![BitcoinAddressType::Witness as u8, 1];
    out.extend_from_slice(&taproot_output_key(internal_key));
    out
}

/// Native address of the key-path taproot address of `internal_key`. The
/// result does not depend on the network.
pub fn taproot_rooch_address(internal_key: XOnlyPublicKey) -> RoochAddress {
    RoochAddress::new(blake2b_256(&taproot_wrapped_bytes(internal_key)))
}

/// Accepts a 33-byte compressed key or a 32-byte x-only key.
pub(crate) fn x_only_public_key(bytes: &[u8]) -> Result<XOnlyPublicKey, BitcoinAddressError> {
    match bytes.len() {
        33 => Ok(PublicKey::from_slice(bytes)?.x_only_public_key().0),
        32 => Ok(XOnlyPublicKey::from_slice(bytes)?),
        n => Err(BitcoinAddressError::InvalidPublicKeyLength(n)),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bitcoin::{Address, Network};
    use proptest::prelude::*;
    use secp256k1::Parity;

    use super::*;

    const BIP86_INTERNAL_KEY: &str =
        "cc8a4bc64d897bddc5fbc2f670f7a8ba0b386779106cf1223c6fc5d7cd6fc115";

    fn rooch_hex(addr: &BitcoinAddress) -> String {
        addr.to_rooch_address().to_hex_long()
    }

    #[test]
    fn test_p2pkh_derivation() {
        let addr =
            BitcoinAddress::parse("18cBEMRxXHqzWWCxZNtU91F5sbUNKhL5PX", BitcoinNetwork::Bitcoin)
                .unwrap();
        assert_eq!(addr.addr_type(), BitcoinAddressType::PubkeyHash);
        assert_eq!(addr.witness_version(), None);
        assert_eq!(addr.wrapped_bytes().len(), 21);
        assert_eq!(
            rooch_hex(&addr),
            "0x419791e7f82060465cf8c16c8f45ab9930b3a944b18e1df2278807c12ea32c65"
        );
        assert_eq!(
            addr.to_rooch_address().to_bech32().unwrap(),
            "rooch1gxterelcypsyvh8cc9kg73dtnyct822ykx8pmu383qruzt4r93jshtc9fj"
        );
    }

    #[test]
    fn test_p2wpkh_derivation() {
        let addr = BitcoinAddress::parse(
            "bc1q262qeyyhdakrje5qaux8m2a3r4z8sw8vu5mysh",
            BitcoinNetwork::Bitcoin,
        )
        .unwrap();
        assert_eq!(addr.addr_type(), BitcoinAddressType::Witness);
        assert_eq!(addr.witness_version(), Some(0));
        assert_eq!(addr.payload().len(), 20);
        assert_eq!(
            rooch_hex(&addr),
            "0x7fe695faf7047ccfbc85f7dccb6c405d4e9b7b44788e71a71c3891a06ce0ca12"
        );
    }

    #[test]
    fn test_p2sh_and_testnet_base58() {
        let p2sh =
            BitcoinAddress::parse("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy", BitcoinNetwork::Bitcoin)
                .unwrap();
        assert_eq!(p2sh.addr_type(), BitcoinAddressType::ScriptHash);
        assert_eq!(
            hex::encode(p2sh.payload()),
            "b472a266d0bd89c13706a4132ccfb16f7c3b9fcb"
        );
        assert_eq!(
            rooch_hex(&p2sh),
            "0x6b73391550f69226bc3f28a0fa719d6e2822445c2ec97e482e3401b7fb8f18a9"
        );

        let test_pkh =
            BitcoinAddress::parse("mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn", BitcoinNetwork::Regtest)
                .unwrap();
        assert_eq!(test_pkh.addr_type(), BitcoinAddressType::PubkeyHash);
        assert_eq!(test_pkh.network(), BitcoinNetwork::Regtest);
        assert_eq!(
            rooch_hex(&test_pkh),
            "0x8d57954270d3c859e378d01775535371a7681ff217176adbd79a80a4e660927c"
        );
    }

    #[test]
    fn test_p2wsh_and_regtest() {
        let p2wsh = BitcoinAddress::parse(
            "bc1qrp33g0q5c5txsp9arysrx4k6zdkfs4nce4xj0gdcccefvpysxf3qccfmv3",
            BitcoinNetwork::Bitcoin,
        )
        .unwrap();
        assert_eq!(p2wsh.payload().len(), 32);
        assert_eq!(
            rooch_hex(&p2wsh),
            "0x25b0d1bda98aec50358b0758dc095b5cf6fa303dfc1a9c7918cccaff91b4f054"
        );

        let regtest = BitcoinAddress::parse(
            "bcrt1qqqqsyqcyq5rqwzqfpg9scrgwpugpzysnard0ew",
            BitcoinNetwork::Regtest,
        )
        .unwrap();
        assert_eq!(regtest.network(), BitcoinNetwork::Regtest);
        assert_eq!(regtest.payload(), (0u8..20).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_witness_validation() {
        // v0 with a 19-byte program
        assert_eq!(
            BitcoinAddress::parse(
                "bc1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqmql8k8",
                BitcoinNetwork::Bitcoin
            ),
            Err(BitcoinAddressError::InvalidWitnessProgramLength {
                version: 0,
                length: 19
            })
        );
        // v2 is not supported regardless of length
        assert_eq!(
            BitcoinAddress::parse(
                "bc1zqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqfaekas",
                BitcoinNetwork::Bitcoin
            ),
            Err(BitcoinAddressError::UnsupportedWitnessVersion(2))
        );
        assert!(BitcoinAddress::from_witness_program(0, vec![0; 20], BitcoinNetwork::Bitcoin).is_ok());
        assert!(BitcoinAddress::from_witness_program(0, vec![0; 32], BitcoinNetwork::Bitcoin).is_ok());
        assert!(BitcoinAddress::from_witness_program(1, vec![0; 20], BitcoinNetwork::Bitcoin).is_err());
        for len in [0, 20, 32, 40] {
            assert_eq!(
                BitcoinAddress::from_witness_program(2, vec![0; len], BitcoinNetwork::Bitcoin),
                Err(BitcoinAddressError::UnsupportedWitnessVersion(2))
            );
        }
    }

    #[test]
    fn test_rejects_noncanonical_padding() {
        // taproot program whose last group carries a nonzero padding bit
        let nonzero_pad = "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxpt0ek93";
        // v0 program followed by an extra zero group
        let extra_group = "bc1q262qeyyhdakrje5qaux8m2a3r4z8sw8vqsy2zj4";
        for text in [nonzero_pad, extra_group] {
            assert_eq!(
                BitcoinAddress::parse(text, BitcoinNetwork::Bitcoin),
                Err(BitcoinAddressError::InvalidPadding(text.to_owned()))
            );
            assert!(Address::from_str(text).is_err());
        }

        // the canonical forms of the same programs still parse
        assert!(BitcoinAddress::parse(
            "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr",
            BitcoinNetwork::Bitcoin
        )
        .is_ok());
        assert!(BitcoinAddress::parse(
            "bc1q262qeyyhdakrje5qaux8m2a3r4z8sw8vu5mysh",
            BitcoinNetwork::Bitcoin
        )
        .is_ok());
    }

    #[test]
    fn test_rejects_length_before_decoding() {
        assert_eq!(
            BitcoinAddress::parse("bc1qshort", BitcoinNetwork::Bitcoin),
            Err(BitcoinAddressError::InvalidLength(9))
        );
        let long = "1".repeat(75);
        assert_eq!(
            BitcoinAddress::parse(&long, BitcoinNetwork::Bitcoin),
            Err(BitcoinAddressError::InvalidLength(75))
        );
    }

    #[test]
    fn test_rejects_bad_base58() {
        let res = BitcoinAddress::parse("18cBEMRxXHqzWWCxZNtU91F5sbUNKhL5PY", BitcoinNetwork::Bitcoin);
        assert!(matches!(res, Err(BitcoinAddressError::InvalidBase58 { .. })));
    }

    #[test]
    fn test_from_public_key_is_bip86_taproot() {
        let key = hex::decode(BIP86_INTERNAL_KEY).unwrap();
        let addr = BitcoinAddress::from_public_key(&key, BitcoinNetwork::Bitcoin).unwrap();
        assert_eq!(
            addr.to_string(),
            "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr"
        );
        assert_eq!(
            rooch_hex(&addr),
            "0x947f2e1a2b8b200a123625f23f16d5f89d8162dcb88593035dd79b671e4d1c0d"
        );

        let xonly = XOnlyPublicKey::from_slice(&key).unwrap();
        let expected = Address::p2tr(SECP256K1, xonly, None, Network::Bitcoin);
        assert_eq!(addr.to_string(), expected.to_string());

        // The compressed form of the same key gives the same address.
        let compressed = PublicKey::from_x_only_public_key(xonly, Parity::Odd);
        let again =
            BitcoinAddress::from_public_key(&compressed.serialize(), BitcoinNetwork::Bitcoin)
                .unwrap();
        assert_eq!(again, addr);
    }

    #[test]
    fn test_wrapped_hex_roundtrip() {
        let addr = BitcoinAddress::from_wrapped_hex(
            "020145966003624094dae2deeb30815eedd38f96c45c3fdb1261f5d697fc4137e0de",
            BitcoinNetwork::Bitcoin,
        )
        .unwrap();
        assert_eq!(
            addr.as_str(),
            "bc1pgktxqqmzgz2d4ck7avcgzhhd6w8ed3zu8ld3yc0466tlcsfhur0qj3y0wm"
        );
        assert_eq!(
            rooch_hex(&addr),
            "0xf8320c07f9e30ea1d4f9e4d7abf07ced414e2f67cdcac03dff86a31f9ee03a41"
        );

        let parsed = BitcoinAddress::parse(addr.as_str(), BitcoinNetwork::Bitcoin).unwrap();
        assert_eq!(parsed, addr);

        let pkh =
            BitcoinAddress::parse("18cBEMRxXHqzWWCxZNtU91F5sbUNKhL5PX", BitcoinNetwork::Bitcoin)
                .unwrap();
        let rebuilt =
            BitcoinAddress::from_wrapped_bytes(&pkh.wrapped_bytes(), BitcoinNetwork::Bitcoin)
                .unwrap();
        assert_eq!(rebuilt.as_str(), pkh.as_str());
    }

    #[test]
    fn test_wrapped_bytes_errors() {
        assert!(BitcoinAddress::from_wrapped_bytes(&[], BitcoinNetwork::Bitcoin).is_err());
        assert!(BitcoinAddress::from_wrapped_bytes(&[7, 0], BitcoinNetwork::Bitcoin).is_err());
        assert!(BitcoinAddress::from_wrapped_bytes(&[0; 5], BitcoinNetwork::Bitcoin).is_err());
        assert!(BitcoinAddress::from_wrapped_hex("0xzz", BitcoinNetwork::Bitcoin).is_err());
    }

    #[test]
    fn test_matches_bitcoin_crate_parsing() {
        for text in [
            "18cBEMRxXHqzWWCxZNtU91F5sbUNKhL5PX",
            "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy",
            "bc1q262qeyyhdakrje5qaux8m2a3r4z8sw8vu5mysh",
            "bc1p5cyxnuxmeuwuvkwfem96lqzszd02n6xdcjrs20cac6yqjjwudpxqkedrcr",
        ] {
            let ours = BitcoinAddress::parse(text, BitcoinNetwork::Bitcoin).unwrap();
            let theirs = Address::from_str(text).unwrap().assume_checked();
            assert_eq!(ours.to_string(), theirs.to_string());
        }
    }

    #[test]
    fn test_native_address_is_cached() {
        let addr = BitcoinAddress::parse(
            "bc1q262qeyyhdakrje5qaux8m2a3r4z8sw8vu5mysh",
            BitcoinNetwork::Bitcoin,
        )
        .unwrap();
        assert!(addr.rooch_address.get().is_none());
        let first = addr.to_rooch_address();
        assert_eq!(addr.rooch_address.get(), Some(&first));
        assert_eq!(addr.to_rooch_address(), first);
    }

    proptest! {
        #[test]
        fn proptest_wrapped_bytes_survive_text(
            type_byte in 0u8..2,
            hash in any::<[u8; 20]>(),
            network in prop_oneof![
                Just(BitcoinNetwork::Bitcoin),
                Just(BitcoinNetwork::Testnet),
                Just(BitcoinNetwork::Regtest),
            ],
        ) {
            let mut wrapped = vec![type_byte];
            wrapped.extend_from_slice(&hash);
            let built = BitcoinAddress::from_wrapped_bytes(&wrapped, network).unwrap();
            let parsed = BitcoinAddress::parse(built.as_str(), network).unwrap();
            prop_assert_eq!(parsed.wrapped_bytes(), wrapped);
            prop_assert_eq!(parsed.to_rooch_address(), built.to_rooch_address());
        }

        #[test]
        fn proptest_witness_programs_survive_text(program in any::<[u8; 32]>(), version in 0u8..2) {
            let built =
                BitcoinAddress::from_witness_program(version, program.to_vec(), BitcoinNetwork::Signet)
                    .unwrap();
            let parsed = BitcoinAddress::parse(built.as_str(), BitcoinNetwork::Signet).unwrap();
            prop_assert_eq!(parsed, built);
        }
    }
}
