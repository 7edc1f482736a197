//! `inspect-key` and `address` subcommands.

use rooch_btc_types::{BitcoinAddress, NostrAddress, NOSTR_HRP};
use rooch_identifiers::RoochAddress;
use serde_json::json;

use crate::{
    args::{CmdContext, SubcAddress, SubcInspectKey},
    util::{key_summary, resolve_keypair},
};

/// Executes the `inspect-key` subcommand.
pub(crate) fn exec_inspect_key(cmd: SubcInspectKey, ctx: &CmdContext) -> anyhow::Result<()> {
    let keypair = resolve_keypair(&cmd.key_file, cmd.key_from_env)?;
    let summary = key_summary(&keypair, ctx.config.bitcoin_network)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Executes the `address` subcommand.
///
/// Native addresses (hex or `rooch1...`) are tried first, then `npub1...`
/// Nostr keys, then Bitcoin addresses on the configured network.
pub(crate) fn exec_address(cmd: SubcAddress, ctx: &CmdContext) -> anyhow::Result<()> {
    let input = cmd.address.trim();

    let summary = if let Ok(address) = input.parse::<RoochAddress>() {
        json!({
            "kind": "rooch",
            "rooch_address": address.to_hex_long(),
            "rooch_bech32": address.to_bech32()?,
        })
    } else if input.to_ascii_lowercase().starts_with(NOSTR_HRP) {
        let nostr: NostrAddress = input.parse()?;
        let rooch = nostr.to_rooch_address();
        json!({
            "kind": "nostr",
            "nostr_address": nostr.as_str(),
            "bitcoin_address": nostr.to_bitcoin_address(ctx.config.bitcoin_network)?.as_str(),
            "rooch_address": rooch.to_hex_long(),
            "rooch_bech32": rooch.to_bech32()?,
        })
    } else {
        let bitcoin = BitcoinAddress::parse(input, ctx.config.bitcoin_network)?;
        let rooch = bitcoin.to_rooch_address();
        json!({
            "kind": "bitcoin",
            "bitcoin_address": bitcoin.as_str(),
            "network": bitcoin.network().to_string(),
            "wrapped_bytes": hex::encode(bitcoin.wrapped_bytes()),
            "rooch_address": rooch.to_hex_long(),
            "rooch_bech32": rooch.to_bech32()?,
        })
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
