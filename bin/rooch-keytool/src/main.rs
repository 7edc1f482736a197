//! Offline key and transaction tool for Rooch.
//!
//! # Warning
//!
//! `generate` prints secret keys to stdout. Keep that output out of shell
//! history and logs.

use std::process;

mod args;
mod cmd;
mod util;

use args::resolve_context_and_subcommand;
use rooch_common::logging::{self, LoggerConfig};
use util::exec_subc;

fn main() {
    let args: args::Args = argh::from_env();
    let inner = || -> anyhow::Result<()> {
        let (ctx, subc) = resolve_context_and_subcommand(args)?;
        let log_config = LoggerConfig::new("rooch-keytool".to_string())
            .with_json_logging(ctx.config.logging.json_format)
            .with_stderr(true);
        logging::try_init(&log_config)?;
        exec_subc(subc, &ctx)?;
        Ok(())
    };
    if let Err(e) = inner() {
        eprintln!("ERROR\n{e:?}");
        process::exit(1);
    }
}
