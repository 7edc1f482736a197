//! Move type tags, module ids and function ids.

use std::{fmt, str::FromStr};

use rooch_codec::{decode_variant_index, encode_variant_index, Codec, CodecError, Decoder, Encoder};
use rooch_identifiers::RoochAddress;

use crate::errors::TxTypeError;

/// Deepest nesting of type parameters accepted when parsing or decoding.
pub const MAX_TYPE_TAG_DEPTH: usize = 16;

/// A Move identifier: ASCII `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(s: impl Into<String>) -> Result<Self, TxTypeError> {
        let s = s.into();
        if !Self::is_valid(&s) {
            return Err(TxTypeError::InvalidIdentifier(s));
        }
        Ok(Self(s))
    }

    pub fn is_valid(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        // A lone underscore is reserved.
        s != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = TxTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Codec for Identifier {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.0.encode(enc)
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        let s = String::decode(dec)?;
        if !Self::is_valid(&s) {
            return Err(CodecError::MalformedField("identifier"));
        }
        Ok(Self(s))
    }
}

/// Runtime type of a Move value. Variant indices follow the Move numbering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    Bool,
    U8,
    U64,
    U128,
    Address,
    Signer,
    Vector(Box<TypeTag>),
    Struct(Box<StructTag>),
    U16,
    U32,
    U256,
}

impl TypeTag {
    fn variant_index(&self) -> u32 {
        match self {
            Self::Bool => 0,
            Self::U8 => 1,
            Self::U64 => 2,
            Self::U128 => 3,
            Self::Address => 4,
            Self::Signer => 5,
            Self::Vector(_) => 6,
            Self::Struct(_) => 7,
            Self::U16 => 8,
            Self::U32 => 9,
            Self::U256 => 10,
        }
    }

    fn write_canonical(&self, f: &mut impl fmt::Write, long: bool) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::U128 => f.write_str("u128"),
            Self::U256 => f.write_str("u256"),
            Self::Address => f.write_str("address"),
            Self::Signer => f.write_str("signer"),
            Self::Vector(inner) => {
                f.write_str("vector<")?;
                inner.write_canonical(f, long)?;
                f.write_str(">")
            }
            Self::Struct(tag) => tag.write_canonical(f, long),
        }
    }

    fn decode_nested(dec: &mut impl Decoder, depth: usize) -> Result<Self, CodecError> {
        if depth > MAX_TYPE_TAG_DEPTH {
            return Err(CodecError::MalformedField("type tag nesting too deep"));
        }
        Ok(match decode_variant_index(dec)? {
            0 => Self::Bool,
            1 => Self::U8,
            2 => Self::U64,
            3 => Self::U128,
            4 => Self::Address,
            5 => Self::Signer,
            6 => Self::Vector(Box::new(Self::decode_nested(dec, depth + 1)?)),
            7 => Self::Struct(Box::new(StructTag::decode_nested(dec, depth + 1)?)),
            8 => Self::U16,
            9 => Self::U32,
            10 => Self::U256,
            index => {
                return Err(CodecError::UnknownVariant {
                    ty: "TypeTag",
                    index,
                })
            }
        })
    }

    fn parse_nested(input: &str, depth: usize) -> Result<Self, TxTypeError> {
        let invalid = |reason| TxTypeError::InvalidTypeTag {
            input: input.to_owned(),
            reason,
        };
        if depth > MAX_TYPE_TAG_DEPTH {
            return Err(invalid("nesting too deep"));
        }

        let s = input.trim();
        Ok(match s {
            "bool" => Self::Bool,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            "u128" => Self::U128,
            "u256" => Self::U256,
            "address" => Self::Address,
            "signer" => Self::Signer,
            _ => {
                if let Some(inner) = s.strip_prefix("vector<").and_then(|r| r.strip_suffix('>')) {
                    Self::Vector(Box::new(Self::parse_nested(inner, depth + 1)?))
                } else if s.contains("::") {
                    Self::Struct(Box::new(StructTag::parse_nested(s, depth + 1)?))
                } else {
                    return Err(invalid("unknown type"));
                }
            }
        })
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f, false)
    }
}

impl FromStr for TypeTag {
    type Err = TxTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_nested(s, 0)
    }
}

impl Codec for TypeTag {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        encode_variant_index(self.variant_index(), enc)?;
        match self {
            Self::Vector(inner) => inner.encode(enc),
            Self::Struct(tag) => tag.encode(enc),
            _ => Ok(()),
        }
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        Self::decode_nested(dec, 0)
    }
}

/// Fully qualified Move struct type, e.g. `0x3::coin::Coin<0x3::gas_coin::RGas>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StructTag {
    pub address: RoochAddress,
    pub module: Identifier,
    pub name: Identifier,
    pub type_params: Vec<TypeTag>,
}

impl StructTag {
    pub fn new(
        address: RoochAddress,
        module: Identifier,
        name: Identifier,
        type_params: Vec<TypeTag>,
    ) -> Self {
        Self {
            address,
            module,
            name,
            type_params,
        }
    }

    pub fn module_id(&self) -> ModuleId {
        ModuleId::new(self.address, self.module.clone())
    }

    /// Form with full-length addresses and no `0x`, the input to named
    /// object id derivation.
    pub fn to_canonical_string(&self) -> String {
        CanonicalStructTag(self).to_string()
    }

    fn write_canonical(&self, f: &mut impl fmt::Write, long: bool) -> fmt::Result {
        if long {
            write!(f, "{}", hex::encode(self.address.as_bytes()))?;
        } else {
            write!(f, "{}", self.address)?;
        }
        write!(f, "::{}::{}", self.module, self.name)?;
        if !self.type_params.is_empty() {
            f.write_str("<")?;
            for (i, param) in self.type_params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                param.write_canonical(f, long)?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }

    fn decode_nested(dec: &mut impl Decoder, depth: usize) -> Result<Self, CodecError> {
        let address = RoochAddress::decode(dec)?;
        let module = Identifier::decode(dec)?;
        let name = Identifier::decode(dec)?;
        let count = rooch_codec::decode_len(dec)?;
        let mut type_params = Vec::with_capacity(count);
        for _ in 0..count {
            type_params.push(TypeTag::decode_nested(dec, depth + 1)?);
        }
        Ok(Self {
            address,
            module,
            name,
            type_params,
        })
    }

    fn parse_nested(s: &str, depth: usize) -> Result<Self, TxTypeError> {
        let invalid = |reason| TxTypeError::InvalidTypeTag {
            input: s.to_owned(),
            reason,
        };

        let (head, type_params) = match s.find('<') {
            Some(open) => {
                let inner = s[open + 1..]
                    .strip_suffix('>')
                    .ok_or_else(|| invalid("unbalanced type parameters"))?;
                let params = split_type_params(inner)
                    .ok_or_else(|| invalid("malformed type parameters"))?
                    .into_iter()
                    .map(|param| TypeTag::parse_nested(param, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                (&s[..open], params)
            }
            None => (s, Vec::new()),
        };

        let mut parts = head.trim().split("::");
        let (Some(address), Some(module), Some(name), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid("expected address::module::name"));
        };
        Ok(Self {
            address: address.parse()?,
            module: Identifier::new(module)?,
            name: Identifier::new(name)?,
            type_params,
        })
    }
}

/// Splits a type parameter list on its top-level commas. Returns `None` on
/// unbalanced brackets or empty entries.
fn split_type_params(inner: &str) -> Option<Vec<&str>> {
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                params.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    params.push(&inner[start..]);
    if params.iter().any(|p| p.trim().is_empty()) {
        return None;
    }
    Some(params)
}

/// Displays a struct tag in its long canonical form.
struct CanonicalStructTag<'a>(&'a StructTag);

impl fmt::Display for CanonicalStructTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_canonical(f, true)
    }
}

impl fmt::Display for StructTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f, false)
    }
}

impl FromStr for StructTag {
    type Err = TxTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_nested(s.trim(), 0)
    }
}

impl Codec for StructTag {
    fn encode(&self, enc: &mut impl Encoder) -> Result<(), CodecError> {
        self.address.encode(enc)?;
        self.module.encode(enc)?;
        self.name.encode(enc)?;
        self.type_params.encode(enc)
    }

    fn decode(dec: &mut impl Decoder) -> Result<Self, CodecError> {
        Self::decode_nested(dec, 0)
    }
}

/// A published module: `address::name`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId {
    pub address: RoochAddress,
    pub name: Identifier,
}

rooch_codec::impl_struct_codec!(ModuleId { address, name });

impl ModuleId {
    pub fn new(address: RoochAddress, name: Identifier) -> Self {
        Self { address, name }
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.address, self.name)
    }
}

impl FromStr for ModuleId {
    type Err = TxTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, name) = s
            .trim()
            .split_once("::")
            .ok_or_else(|| TxTypeError::InvalidModuleId(s.to_owned()))?;
        Ok(Self::new(address.parse()?, Identifier::new(name)?))
    }
}

/// An entry function: `address::module::function`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionId {
    pub module_id: ModuleId,
    pub function_name: Identifier,
}

rooch_codec::impl_struct_codec!(FunctionId {
    module_id,
    function_name,
});

impl FunctionId {
    pub fn new(module_id: ModuleId, function_name: Identifier) -> Self {
        Self {
            module_id,
            function_name,
        }
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module_id, self.function_name)
    }
}

impl FromStr for FunctionId {
    type Err = TxTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module, function) = s
            .trim()
            .rsplit_once("::")
            .ok_or_else(|| TxTypeError::InvalidFunctionId(s.to_owned()))?;
        if !module.contains("::") {
            return Err(TxTypeError::InvalidFunctionId(s.to_owned()));
        }
        Ok(Self::new(module.parse()?, Identifier::new(function)?))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use proptest::prelude::*;
    use rooch_codec::{decode_buf_exact, encode_to_vec};

    use super::*;

    pub(crate) fn arb_identifier() -> impl Strategy<Value = Identifier> + Clone {
        "[a-z][a-z0-9_]{0,12}".prop_map(|s| Identifier::new(s).unwrap())
    }

    pub(crate) fn arb_type_tag() -> impl Strategy<Value = TypeTag> + Clone {
        let leaf = prop_oneof![
            Just(TypeTag::Bool),
            Just(TypeTag::U8),
            Just(TypeTag::U16),
            Just(TypeTag::U32),
            Just(TypeTag::U64),
            Just(TypeTag::U128),
            Just(TypeTag::U256),
            Just(TypeTag::Address),
            Just(TypeTag::Signer),
        ];
        leaf.prop_recursive(3, 12, 3, |inner| {
            prop_oneof![
                inner.clone().prop_map(|t| TypeTag::Vector(Box::new(t))),
                (
                    any::<[u8; 32]>(),
                    arb_identifier(),
                    arb_identifier(),
                    prop::collection::vec(inner, 0..3)
                )
                    .prop_map(|(addr, module, name, params)| {
                        TypeTag::Struct(Box::new(StructTag::new(
                            RoochAddress::new(addr),
                            module,
                            name,
                            params,
                        )))
                    }),
            ]
        })
    }

    fn coin_of_gas() -> StructTag {
        StructTag::new(
            RoochAddress::THREE,
            Identifier::new("coin").unwrap(),
            Identifier::new("Coin").unwrap(),
            vec![TypeTag::Struct(Box::new(StructTag::new(
                RoochAddress::THREE,
                Identifier::new("gas_coin").unwrap(),
                Identifier::new("RGas").unwrap(),
                vec![],
            )))],
        )
    }

    #[test]
    fn test_identifiers() {
        assert!(Identifier::is_valid("transfer"));
        assert!(Identifier::is_valid("_private1"));
        assert!(!Identifier::is_valid("_"));
        assert!(!Identifier::is_valid("1abc"));
        assert!(!Identifier::is_valid("a-b"));
        assert!(!Identifier::is_valid(""));
    }

    #[test]
    fn test_parse_type_tags() {
        assert_eq!("u8".parse::<TypeTag>().unwrap(), TypeTag::U8);
        assert_eq!(
            "vector<u8>".parse::<TypeTag>().unwrap(),
            TypeTag::Vector(Box::new(TypeTag::U8))
        );
        assert_eq!(
            "vector<vector<address>>".parse::<TypeTag>().unwrap(),
            TypeTag::Vector(Box::new(TypeTag::Vector(Box::new(TypeTag::Address))))
        );
        let parsed: TypeTag = "0x3::coin::Coin<0x3::gas_coin::RGas>".parse().unwrap();
        assert_eq!(parsed, TypeTag::Struct(Box::new(coin_of_gas())));
        assert_eq!(parsed.to_string(), "0x3::coin::Coin<0x3::gas_coin::RGas>");
    }

    #[test]
    fn test_parse_multiple_params() {
        let tag: StructTag = "0x1::table::Table<u64, vector<0x3::gas_coin::RGas>>"
            .parse()
            .unwrap();
        assert_eq!(tag.type_params.len(), 2);
        assert_eq!(tag.type_params[0], TypeTag::U64);
        assert_eq!(
            tag.to_string(),
            "0x1::table::Table<u64, vector<0x3::gas_coin::RGas>>"
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "",
            "u9",
            "vector<u8",
            "vector<>",
            "0x3::coin",
            "0x3::coin::Coin<>",
            "0x3::coin::Coin<u8,>",
            "0x3::coin::Coin<u8>>",
            "0x3::coin::Coin::Extra",
            "0xzz::coin::Coin",
            "0x3::1coin::Coin",
        ] {
            assert!(bad.parse::<TypeTag>().is_err(), "{bad:?} parsed");
        }
    }

    #[test]
    fn test_parse_depth_limited() {
        let deep = format!("{}u8{}", "vector<".repeat(40), ">".repeat(40));
        assert!(matches!(
            deep.parse::<TypeTag>(),
            Err(TxTypeError::InvalidTypeTag {
                reason: "nesting too deep",
                ..
            })
        ));
    }

    #[test]
    fn test_canonical_string() {
        assert_eq!(
            coin_of_gas().to_canonical_string(),
            format!(
                "{}::coin::Coin<{}::gas_coin::RGas>",
                "0".repeat(63) + "3",
                "0".repeat(63) + "3"
            )
        );
    }

    #[test]
    fn test_function_id() {
        let id: FunctionId = "0x3::transfer::transfer_coin".parse().unwrap();
        assert_eq!(id.module_id.address, RoochAddress::THREE);
        assert_eq!(id.module_id.name.as_str(), "transfer");
        assert_eq!(id.function_name.as_str(), "transfer_coin");
        assert_eq!(id.to_string(), "0x3::transfer::transfer_coin");

        assert!("transfer_coin".parse::<FunctionId>().is_err());
        assert!("0x3::transfer".parse::<FunctionId>().is_err());
    }

    #[test]
    fn test_type_tag_encoding() {
        assert_eq!(encode_to_vec(&TypeTag::U256).unwrap(), [10]);
        assert_eq!(
            encode_to_vec(&TypeTag::Vector(Box::new(TypeTag::U8))).unwrap(),
            [6, 1]
        );

        let mut expected = vec![7];
        expected.extend_from_slice(RoochAddress::THREE.as_bytes());
        expected.extend_from_slice(&[4, b'c', b'o', b'i', b'n', 4, b'C', b'o', b'i', b'n', 1, 7]);
        let encoded = encode_to_vec(&TypeTag::Struct(Box::new(coin_of_gas()))).unwrap();
        assert!(encoded.starts_with(&expected));
    }

    #[test]
    fn test_decode_rejects_unknown_and_deep() {
        assert_eq!(
            decode_buf_exact::<TypeTag>(&[11]).unwrap_err(),
            CodecError::UnknownVariant {
                ty: "TypeTag",
                index: 11
            }
        );
        let mut deep = vec![6; 100];
        deep.push(1);
        assert_eq!(
            decode_buf_exact::<TypeTag>(&deep).unwrap_err(),
            CodecError::MalformedField("type tag nesting too deep")
        );
    }

    proptest! {
        #[test]
        fn proptest_type_tag_codec(tag in arb_type_tag()) {
            let encoded = encode_to_vec(&tag).unwrap();
            prop_assert_eq!(decode_buf_exact::<TypeTag>(&encoded).unwrap(), tag);
        }

        #[test]
        fn proptest_type_tag_display_parses(tag in arb_type_tag()) {
            prop_assert_eq!(tag.to_string().parse::<TypeTag>().unwrap(), tag);
        }
    }
}
