//! `verify` subcommand: decodes a signed transaction and checks it.

use rooch_tx_types::RoochTransaction;
use serde_json::json;

use crate::{
    args::{CmdContext, SubcVerify},
    util::resolve_sign_with,
};

/// Executes the `verify` subcommand.
///
/// Fails if the authenticator does not match the transaction or its sender.
pub(crate) fn exec(cmd: SubcVerify, ctx: &CmdContext) -> anyhow::Result<()> {
    let tx = RoochTransaction::decode_hex(cmd.tx.trim())?;
    let sign_with = resolve_sign_with(cmd.sign_with.as_deref(), ctx)?;
    tx.verify(sign_with)?;

    let summary = json!({
        "hash": tx.hash()?.to_string(),
        "sender": tx.sender().to_hex_long(),
        "sequence_number": tx.data.sequence_number,
        "chain_id": tx.data.chain_id,
        "max_gas_amount": tx.data.max_gas_amount,
        "auth_validator_id": tx.authenticator.auth_validator_id,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
