//! Command line arguments for the `rooch-keytool` binary.

use std::path::PathBuf;

use argh::FromArgs;
use rooch_config::ClientConfig;

/// Args.
#[derive(FromArgs)]
pub(crate) struct Args {
    #[argh(option, description = "client config file (.toml)", short = 'c')]
    pub(crate) config: Option<PathBuf>,

    #[argh(
        option,
        description = "network name [localnet, devnet, testnet, mainnet]",
        short = 'n'
    )]
    pub(crate) network: Option<String>,

    #[argh(
        option,
        description = "bitcoin network name [bitcoin, testnet, signet, regtest]",
        short = 'b'
    )]
    pub(crate) bitcoin_network: Option<String>,

    #[argh(switch, description = "emit logs as json")]
    pub(crate) json_logs: bool,

    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    Generate(SubcGenerate),
    InspectKey(SubcInspectKey),
    Address(SubcAddress),
    Sign(SubcSign),
    Verify(SubcVerify),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "generate",
    description = "generates a keypair and prints it with its addresses"
)]
pub(crate) struct SubcGenerate {
    #[argh(
        option,
        description = "signature scheme [ed25519, secp256k1] (default ed25519)",
        short = 's'
    )]
    pub(crate) scheme: Option<String>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "inspect-key",
    description = "prints the public key and addresses of a secret key"
)]
pub(crate) struct SubcInspectKey {
    #[argh(option, description = "reads key from specified file", short = 'f')]
    pub(crate) key_file: Option<PathBuf>,

    #[argh(
        switch,
        description = "reads key from envvar ROOCH_SECRET_KEY",
        short = 'E'
    )]
    pub(crate) key_from_env: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "address",
    description = "parses a rooch, bitcoin or nostr address and prints its forms"
)]
pub(crate) struct SubcAddress {
    #[argh(positional, description = "address to parse")]
    pub(crate) address: String,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "sign",
    description = "builds and signs a function call, printing the transaction hex"
)]
pub(crate) struct SubcSign {
    #[argh(option, description = "reads key from specified file", short = 'f')]
    pub(crate) key_file: Option<PathBuf>,

    #[argh(
        switch,
        description = "reads key from envvar ROOCH_SECRET_KEY",
        short = 'E'
    )]
    pub(crate) key_from_env: bool,

    #[argh(
        option,
        description = "function to call, like 0x3::transfer::transfer_coin",
        short = 'F'
    )]
    pub(crate) function: String,

    #[argh(option, description = "type argument, repeatable", short = 't')]
    pub(crate) type_arg: Vec<String>,

    #[argh(
        option,
        description = "argument as <type>:<value>, repeatable (u8..u256, bool, address, string, object_id, object, raw)",
        short = 'a'
    )]
    pub(crate) arg: Vec<String>,

    #[argh(option, description = "sender sequence number (default 0)")]
    pub(crate) sequence_number: Option<u64>,

    #[argh(option, description = "gas limit (default from config)")]
    pub(crate) max_gas_amount: Option<u64>,

    #[argh(switch, description = "sign as a bitcoin message (secp256k1 keys only)")]
    pub(crate) bitcoin: bool,

    #[argh(option, description = "text shown to the signer with --bitcoin")]
    pub(crate) message_info: Option<String>,

    #[argh(option, description = "what --bitcoin signs [hash, raw] (default from config)")]
    pub(crate) sign_with: Option<String>,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "verify",
    description = "decodes a transaction hex and checks its authenticator"
)]
pub(crate) struct SubcVerify {
    #[argh(positional, description = "transaction hex, 0x prefix optional")]
    pub(crate) tx: String,

    #[argh(option, description = "what a bitcoin signer signed [hash, raw] (default from config)")]
    pub(crate) sign_with: Option<String>,
}

pub(crate) struct CmdContext {
    /// Loaded config with command line overrides applied.
    pub(crate) config: ClientConfig,
}

/// Resolves the command context and subcommand from the parsed command line arguments.
///
/// Command line options take priority over the config file, which takes
/// priority over built-in defaults.
pub(crate) fn resolve_context_and_subcommand(
    args: Args,
) -> anyhow::Result<(CmdContext, Subcommand)> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };

    if let Some(network) = args.network.as_deref() {
        config.network = network.parse()?;
    }
    if let Some(network) = args.bitcoin_network.as_deref() {
        config.bitcoin_network = network.parse()?;
    }
    if args.json_logs {
        config.logging.json_format = true;
    }

    Ok((CmdContext { config }, args.subc))
}
