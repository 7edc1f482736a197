//! Helpers shared by the `rooch-keytool` subcommands.

use std::{env, fs, path::PathBuf};

use ethnum::U256;
use rooch_btc_types::BitcoinNetwork;
use rooch_crypto::{Keypair, SignWith, Signer};
use rooch_identifiers::{ObjectId, RoochAddress};
use rooch_tx_types::{args::MoveArg, StructTag};
use serde_json::{json, Value};
use zeroize::Zeroizing;

use crate::{
    args::{CmdContext, Subcommand},
    cmd,
};

/// Secret key environment variable.
pub(crate) const SECRET_KEY_ENVVAR: &str = "ROOCH_SECRET_KEY";

/// Executes a subcommand.
pub(crate) fn exec_subc(cmd: Subcommand, ctx: &CmdContext) -> anyhow::Result<()> {
    match cmd {
        Subcommand::Generate(subc) => cmd::generate::exec(subc, ctx),
        Subcommand::InspectKey(subc) => cmd::inspect::exec_inspect_key(subc, ctx),
        Subcommand::Address(subc) => cmd::inspect::exec_address(subc, ctx),
        Subcommand::Sign(subc) => cmd::sign::exec(subc, ctx),
        Subcommand::Verify(subc) => cmd::verify::exec(subc, ctx),
    }
}

/// Reads a `roochsecretkey1...` key from a file or from [`SECRET_KEY_ENVVAR`].
pub(crate) fn resolve_keypair(key_file: &Option<PathBuf>, from_env: bool) -> anyhow::Result<Keypair> {
    let raw = match (key_file, from_env) {
        (Some(_), true) => anyhow::bail!("must either set key file or key from env, not both"),
        (Some(path), false) => Zeroizing::new(fs::read_to_string(path)?),
        (None, true) => Zeroizing::new(env::var(SECRET_KEY_ENVVAR).map_err(|_| {
            anyhow::anyhow!("{SECRET_KEY_ENVVAR} is not set")
        })?),
        (None, false) => anyhow::bail!("no key source given, use --key-file or --key-from-env"),
    };
    Ok(Keypair::from_bech32_secret(raw.trim())?)
}

/// Picks the sign mode from the command line, falling back to the config.
pub(crate) fn resolve_sign_with(arg: Option<&str>, ctx: &CmdContext) -> anyhow::Result<SignWith> {
    match arg {
        Some(s) => Ok(s.parse()?),
        None => Ok(ctx.config.bitcoin_sign_with),
    }
}

/// Parses a `<type>:<value>` argument into its encoded form.
pub(crate) fn parse_move_arg(s: &str) -> anyhow::Result<MoveArg> {
    let Some((ty, value)) = s.split_once(':') else {
        anyhow::bail!("argument '{s}' is not in <type>:<value> form");
    };
    let arg = match ty {
        "u8" => MoveArg::u8(value.parse()?),
        "u16" => MoveArg::u16(value.parse()?),
        "u32" => MoveArg::u32(value.parse()?),
        "u64" => MoveArg::u64(value.parse()?),
        "u128" => MoveArg::u128(value.parse()?),
        "u256" => MoveArg::u256(U256::from_str_radix(value, 10)?),
        "bool" => MoveArg::bool(value.parse()?),
        "address" => MoveArg::address(value.parse::<RoochAddress>()?),
        "string" => MoveArg::string(value)?,
        "object_id" => MoveArg::object_id(&value.parse::<ObjectId>()?)?,
        "object" => MoveArg::object(&value.parse::<StructTag>()?)?,
        "raw" => {
            let digits = value.strip_prefix("0x").unwrap_or(value);
            MoveArg::from_encoded(hex::decode(digits)?)
        }
        other => anyhow::bail!("unsupported argument type '{other}'"),
    };
    Ok(arg)
}

/// Public key and every address of a keypair, as JSON.
pub(crate) fn key_summary(keypair: &Keypair, network: BitcoinNetwork) -> anyhow::Result<Value> {
    let address = keypair.to_rooch_address();
    let mut summary = json!({
        "scheme": keypair.scheme().to_string(),
        "public_key": keypair.public_key().to_hex(),
        "rooch_address": address.to_hex_long(),
        "rooch_bech32": address.to_bech32()?,
    });
    if let Some(secp) = keypair.as_secp256k1() {
        let view = secp.address_view(network)?;
        summary["bitcoin_address"] = json!(view.bitcoin_address.as_str());
        summary["nostr_address"] = json!(view.nostr_address.as_str());
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use rooch_crypto::SignatureScheme;

    use super::*;

    #[test]
    fn test_parse_move_arg() {
        assert_eq!(parse_move_arg("u8:7").unwrap(), MoveArg::u8(7));
        assert_eq!(parse_move_arg("u64:1000").unwrap(), MoveArg::u64(1000));
        assert_eq!(
            parse_move_arg("u256:5").unwrap(),
            MoveArg::u256(U256::from(5u8))
        );
        assert_eq!(parse_move_arg("bool:true").unwrap(), MoveArg::bool(true));
        assert_eq!(
            parse_move_arg("address:0x3").unwrap(),
            MoveArg::address(RoochAddress::THREE)
        );
        assert_eq!(
            parse_move_arg("string:a:b").unwrap(),
            MoveArg::string("a:b").unwrap()
        );
        assert_eq!(
            parse_move_arg("raw:0x0102").unwrap(),
            MoveArg::from_encoded(vec![1, 2])
        );
    }

    #[test]
    fn test_parse_move_arg_errors() {
        assert!(parse_move_arg("7").is_err());
        assert!(parse_move_arg("u8:256").is_err());
        assert!(parse_move_arg("f32:1.0").is_err());
        assert!(parse_move_arg("raw:0xzz").is_err());
    }

    #[test]
    fn test_key_summary_fields() {
        let ed = Keypair::generate(SignatureScheme::Ed25519);
        let summary = key_summary(&ed, BitcoinNetwork::Regtest).unwrap();
        assert_eq!(summary["scheme"], "ED25519");
        assert_eq!(
            summary["rooch_address"],
            ed.to_rooch_address().to_hex_long().as_str()
        );
        assert!(summary.get("bitcoin_address").is_none());

        let secp = Keypair::generate(SignatureScheme::Secp256k1);
        let summary = key_summary(&secp, BitcoinNetwork::Bitcoin).unwrap();
        assert!(summary["bitcoin_address"].as_str().unwrap().starts_with("bc1p"));
        assert!(summary["nostr_address"].as_str().unwrap().starts_with("npub1"));
    }
}
