//! `generate` subcommand: generates a keypair and prints it with its addresses.

use rooch_crypto::{Keypair, SignatureScheme};

use crate::{
    args::{CmdContext, SubcGenerate},
    util::key_summary,
};

/// Executes the `generate` subcommand.
///
/// Prints the key summary plus the secret in `roochsecretkey1...` form.
pub(crate) fn exec(cmd: SubcGenerate, ctx: &CmdContext) -> anyhow::Result<()> {
    let scheme = match cmd.scheme.as_deref() {
        Some(s) => s.parse()?,
        None => SignatureScheme::Ed25519,
    };
    let keypair = Keypair::generate(scheme);

    let mut summary = key_summary(&keypair, ctx.config.bitcoin_network)?;
    summary["secret_key"] = keypair.to_bech32_secret()?.into();
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
