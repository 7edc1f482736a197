//! The 32-byte native account/object address.

use std::{fmt, str::FromStr};

use bech32::{primitives::decode::CheckedHrpstring, Bech32m, Hrp};

use crate::{
    errors::AddressError,
    hash::{blake2b_256_parts, sha3_256_parts},
};

/// Human-readable prefix of the bech32 address form.
pub const ROOCH_HRP: &str = "rooch";

pub const ROOCH_ADDRESS_LENGTH: usize = 32;

/// Domain separators for [`RoochAddress::derived_address`].
pub const DERIVE_OBJECT_ADDRESS_FROM_SEED: u8 = 0xFC;
pub const DERIVE_OBJECT_FROM_GUID: u8 = 0xFD;
pub const DERIVE_NAMED_OBJECT: u8 = 0xFE;
pub const DERIVE_RESOURCE_ACCOUNT: u8 = 0xFF;

/// Native 32-byte address.
///
/// Addresses whose leading 31 bytes are zero and whose last byte is below 16
/// are *special*: their canonical text form is a single hex digit (`0x1`,
/// `0x3`, ...). Every other address renders as the full 64 hex digits.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoochAddress([u8; 32]);

impl_buf32_core!(RoochAddress);
impl_buf32_serde!(RoochAddress);

const fn special(n: u8) -> RoochAddress {
    let mut buf = [0; 32];
    buf[31] = n;
    RoochAddress(buf)
}

impl RoochAddress {
    pub const ZERO: Self = special(0);
    pub const ONE: Self = special(1);
    pub const TWO: Self = special(2);
    pub const THREE: Self = special(3);
    pub const FOUR: Self = special(4);

    /// Derives an address from key material: `blake2b-256(prefix || key)`.
    ///
    /// Public keys use their scheme's size byte as the prefix.
    pub fn from_key_material(prefix: u8, key: &[u8]) -> Self {
        Self(blake2b_256_parts(&[&[prefix], key]))
    }

    /// Builds an address from a byte slice that must be exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        Self::try_from(bytes)
    }

    /// Returns whether this is one of the special addresses `0x0..=0xf`.
    pub fn is_special(&self) -> bool {
        self.0[..31].iter().all(|b| *b == 0) && self.0[31] < 0x10
    }

    /// Canonical hex form, using the single-digit form for special addresses.
    pub fn to_hex(&self) -> String {
        if self.is_special() {
            format!("0x{:x}", self.0[31])
        } else {
            self.to_hex_long()
        }
    }

    /// Full 64-digit hex form, used for indexing.
    pub fn to_hex_long(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Bech32m form with the `rooch` prefix.
    pub fn to_bech32(&self) -> Result<String, AddressError> {
        bech32::encode::<Bech32m>(Hrp::parse_unchecked(ROOCH_HRP), &self.0).map_err(|e| {
            AddressError::InvalidBech32 {
                input: self.to_hex_long(),
                reason: e.to_string(),
            }
        })
    }

    /// Parses hex digits, with or without `0x`. Short inputs are left-padded
    /// with zeros; more than 64 digits is an error.
    pub fn from_hex_literal(s: &str) -> Result<Self, AddressError> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(AddressError::InvalidHex {
                input: s.to_owned(),
                reason: "no hex digits".to_owned(),
            });
        }
        if digits.len() > ROOCH_ADDRESS_LENGTH * 2 {
            return Err(AddressError::InvalidLength {
                expected: ROOCH_ADDRESS_LENGTH,
                actual: digits.len().div_ceil(2),
            });
        }

        let padded = format!("{digits:0>64}");
        let mut buf = [0; 32];
        hex::decode_to_slice(&padded, &mut buf).map_err(|e| AddressError::InvalidHex {
            input: s.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self(buf))
    }

    /// Parses the bech32m form. The checksum variant, prefix and decoded
    /// length are all checked.
    pub fn from_bech32(s: &str) -> Result<Self, AddressError> {
        let checked = CheckedHrpstring::new::<Bech32m>(s).map_err(|e| {
            AddressError::InvalidBech32 {
                input: s.to_owned(),
                reason: e.to_string(),
            }
        })?;
        let hrp = checked.hrp().to_lowercase();
        if hrp != ROOCH_HRP {
            return Err(AddressError::WrongPrefix {
                expected: ROOCH_HRP,
                found: hrp,
            });
        }
        let bytes: Vec<u8> = checked.byte_iter().collect();
        Self::try_from(bytes.as_slice())
    }

    /// Derives a sub-address: `sha3-256(self || seed || [type_byte])`.
    pub fn derived_address(&self, seed: &[u8], type_byte: u8) -> Self {
        Self(sha3_256_parts(&[&self.0, seed, &[type_byte]]))
    }

    /// Address of a resource account created by this address.
    pub fn resource_account_address(&self, seed: &[u8]) -> Self {
        self.derived_address(seed, DERIVE_RESOURCE_ACCOUNT)
    }

    /// Address of a named object created by this address.
    pub fn named_object_address(&self, seed: &[u8]) -> Self {
        self.derived_address(seed, DERIVE_NAMED_OBJECT)
    }

    /// Address of an object created by this address from a seed.
    pub fn object_address_from_seed(&self, seed: &[u8]) -> Self {
        self.derived_address(seed, DERIVE_OBJECT_ADDRESS_FROM_SEED)
    }
}

impl FromStr for RoochAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let prefix = format!("{ROOCH_HRP}1");
        if s
            .get(..prefix.len())
            .is_some_and(|p| p.eq_ignore_ascii_case(&prefix))
        {
            return Self::from_bech32(s);
        }

        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::from_hex_literal(s);
        }
        if digits.len() != s.len() {
            // Had a 0x prefix, so report the hex problem.
            return Self::from_hex_literal(s);
        }

        Err(AddressError::UnrecognizedFormat(s.to_owned()))
    }
}

impl fmt::Display for RoochAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for RoochAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoochAddress({})", self.to_hex())
    }
}

impl fmt::LowerHex for RoochAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&hex::encode(self.0))
    }
}

/// Returns the full `0x`-prefixed 64-digit form of a hex address.
pub fn normalize_address(input: &str) -> Result<String, AddressError> {
    RoochAddress::from_hex_literal(input).map(|a| a.to_hex_long())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rooch_codec::{decode_buf_exact, encode_to_vec};

    use super::*;
    use crate::test_utils::arb_address;

    #[test]
    fn test_reserved_addresses() {
        assert_eq!(RoochAddress::ZERO.to_string(), "0x0");
        assert_eq!(RoochAddress::ONE.to_string(), "0x1");
        assert_eq!(RoochAddress::FOUR.to_string(), "0x4");
        assert!(RoochAddress::ZERO.is_zero());
        assert_eq!(
            RoochAddress::THREE.to_hex_long(),
            "0x0000000000000000000000000000000000000000000000000000000000000003"
        );
    }

    #[test]
    fn test_special_boundaries() {
        let mut buf = [0u8; 32];
        buf[31] = 15;
        let addr = RoochAddress::new(buf);
        assert!(addr.is_special());
        assert_eq!(addr.to_hex(), "0xf");

        buf[31] = 16;
        let addr = RoochAddress::new(buf);
        assert!(!addr.is_special());
        assert_eq!(addr.to_hex().len(), 66);

        let mut buf = [0u8; 32];
        buf[0] = 1;
        buf[31] = 1;
        let addr = RoochAddress::new(buf);
        assert!(!addr.is_special());
        assert_eq!(addr.to_hex(), addr.to_hex_long());
    }

    #[test]
    fn test_bech32_known_vector() {
        let addr: RoochAddress = "0x419791e7f82060465cf8c16c8f45ab9930b3a944b18e1df2278807c12ea32c65"
            .parse()
            .unwrap();
        let bech = addr.to_bech32().unwrap();
        assert_eq!(
            bech,
            "rooch1gxterelcypsyvh8cc9kg73dtnyct822ykx8pmu383qruzt4r93jshtc9fj"
        );
        assert_eq!(bech.parse::<RoochAddress>().unwrap(), addr);
        assert_eq!(
            bech.to_uppercase().parse::<RoochAddress>().unwrap(),
            addr
        );
    }

    #[test]
    fn test_bech32_rejects_bad_checksum() {
        let res = "rooch1gxterelcypsyvh8cc9kg73dtnyct822ykx8pmu383qruzt4r93jshtc9fq"
            .parse::<RoochAddress>();
        assert!(matches!(res, Err(AddressError::InvalidBech32 { .. })));
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("0x3".parse::<RoochAddress>().unwrap(), RoochAddress::THREE);
        assert_eq!("0X03".parse::<RoochAddress>().unwrap(), RoochAddress::THREE);
        assert_eq!("3".parse::<RoochAddress>().unwrap(), RoochAddress::THREE);

        let too_long = format!("0x{}", "1".repeat(66));
        assert_eq!(
            too_long.parse::<RoochAddress>(),
            Err(AddressError::InvalidLength {
                expected: 32,
                actual: 33
            })
        );
        assert!(matches!(
            "0xzz".parse::<RoochAddress>(),
            Err(AddressError::InvalidHex { .. })
        ));
        assert!(matches!(
            "hello".parse::<RoochAddress>(),
            Err(AddressError::UnrecognizedFormat(_))
        ));
    }

    #[test]
    fn test_normalize_address() {
        assert_eq!(
            normalize_address("0x1").unwrap(),
            "0x0000000000000000000000000000000000000000000000000000000000000001"
        );
    }

    #[test]
    fn test_try_from_slice_checks_length() {
        assert_eq!(
            RoochAddress::try_from(&[1u8; 20][..]),
            Err(AddressError::InvalidLength {
                expected: 32,
                actual: 20
            })
        );
        assert_eq!(
            RoochAddress::from_bytes(&[7u8; 32]).unwrap(),
            RoochAddress::new([7; 32])
        );
        assert!(RoochAddress::from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_codec_is_raw_32_bytes() {
        let bytes = encode_to_vec(&RoochAddress::ONE).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[31], 1);
        assert_eq!(decode_buf_exact::<RoochAddress>(&bytes).unwrap(), RoochAddress::ONE);
        assert!(decode_buf_exact::<RoochAddress>(&bytes[..31]).is_err());
    }

    #[test]
    fn test_derived_address_is_sha3_of_parts() {
        let addr = RoochAddress::ONE;
        let derived = addr.derived_address(b"seed", DERIVE_RESOURCE_ACCOUNT);

        let mut buf = addr.as_bytes().to_vec();
        buf.extend_from_slice(b"seed");
        buf.push(0xFF);
        assert_eq!(*derived.as_bytes(), crate::hash::sha3_256(&buf));
        assert_eq!(derived, addr.resource_account_address(b"seed"));
        assert_ne!(derived, addr.named_object_address(b"seed"));
    }

    #[test]
    fn test_key_material_derivation() {
        let key = [7u8; 32];
        let a = RoochAddress::from_key_material(32, &key);
        let mut buf = vec![32u8];
        buf.extend_from_slice(&key);
        assert_eq!(*a.as_bytes(), crate::hash::blake2b_256(&buf));
    }

    #[test]
    fn test_serde_json_uses_canonical_hex() {
        let json = serde_json::to_string(&RoochAddress::TWO).unwrap();
        assert_eq!(json, "\"0x2\"");
        assert_eq!(
            serde_json::from_str::<RoochAddress>(&json).unwrap(),
            RoochAddress::TWO
        );
    }

    proptest! {
        #[test]
        fn proptest_text_forms_roundtrip(addr in arb_address()) {
            prop_assert_eq!(addr.to_hex().parse::<RoochAddress>().unwrap(), addr);
            prop_assert_eq!(addr.to_hex_long().parse::<RoochAddress>().unwrap(), addr);
            prop_assert_eq!(addr.to_bech32().unwrap().parse::<RoochAddress>().unwrap(), addr);
        }

        #[test]
        fn proptest_special_rendering(n in 0u8..16) {
            let mut buf = [0u8; 32];
            buf[31] = n;
            prop_assert_eq!(RoochAddress::new(buf).to_hex(), format!("0x{n:x}"));
        }
    }
}
