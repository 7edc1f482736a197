//! `sign` subcommand: builds and signs a function call transaction.

use rooch_crypto::Signer;
use rooch_tx_types::{FunctionId, MoveAction, RoochTransaction, TransactionData, TypeTag};
use tracing::*;

use crate::{
    args::{CmdContext, SubcSign},
    util::{parse_move_arg, resolve_keypair, resolve_sign_with},
};

/// Executes the `sign` subcommand.
///
/// The sender is the key's own address and the chain id comes from the
/// configured network. Prints the `0x`-prefixed transaction hex.
pub(crate) fn exec(cmd: SubcSign, ctx: &CmdContext) -> anyhow::Result<()> {
    let keypair = resolve_keypair(&cmd.key_file, cmd.key_from_env)?;

    let function: FunctionId = cmd.function.parse()?;
    let ty_args = cmd
        .type_arg
        .iter()
        .map(|t| t.parse::<TypeTag>())
        .collect::<Result<Vec<_>, _>>()?;
    let args = cmd
        .arg
        .iter()
        .map(String::as_str)
        .map(parse_move_arg)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let data = TransactionData::new(
        keypair.to_rooch_address(),
        cmd.sequence_number.unwrap_or(0),
        ctx.config.chain_id(),
        cmd.max_gas_amount.unwrap_or(ctx.config.max_gas_amount),
        MoveAction::new_function_call(function, ty_args, args),
    );

    let tx = if cmd.bitcoin {
        let Some(secp) = keypair.as_secp256k1() else {
            anyhow::bail!("--bitcoin needs a secp256k1 key");
        };
        let sign_with = resolve_sign_with(cmd.sign_with.as_deref(), ctx)?;
        RoochTransaction::sign_bitcoin(
            data,
            secp,
            cmd.message_info.as_deref().unwrap_or_default(),
            sign_with,
            ctx.config.bitcoin_network,
        )?
    } else {
        RoochTransaction::sign_rooch(data, &keypair)?
    };

    let hash = tx.hash()?;
    info!(%hash, sender = %tx.sender(), "built transaction");
    println!("{}", tx.encode_hex()?);
    Ok(())
}
