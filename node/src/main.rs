use advlib::error::Result as ChainResult;
use advlib::pow::Sha256dHasher;
use advlib::registry::NetworkRegistry;
use advlib::util::Saveable;
use anyhow::{Context, Result};
use argh::FromArgs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::*;

mod config;
mod util;

use config::NodeConfig;

#[derive(FromArgs, Debug)]
/// Bootstraps the network parameters and reports the active profile
struct Args {
    #[argh(switch)]
    /// run on the test network
    testnet: bool,
    #[argh(option)]
    /// path to a TOML config file
    config: Option<PathBuf>,
    #[argh(option)]
    /// write the active genesis block to this file (CBOR)
    dump_genesis: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    let config = match NodeConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    util::setup_tracing(&config.log_level);
    util::setup_panic_hook();

    // TODO: swap in the networks' own header hash. SHA-256d does not reproduce the genesis
    // hash literals, so startup aborts with a genesis hash mismatch until then.
    exit_code(run(args, config, || NetworkRegistry::new(&Sha256dHasher)))
}

fn exit_code(outcome: Result<()>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("startup aborted: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    args: Args,
    config: NodeConfig,
    build_registry: impl FnOnce() -> ChainResult<NetworkRegistry>,
) -> Result<()> {
    let registry = build_registry().context("network parameters failed verification")?;

    // read once, select once
    let params = registry.select_from_flag(args.testnet || config.testnet);
    util::report(&params);

    if let Some(path) = args.dump_genesis {
        params
            .genesis_block()
            .save_to_file(&path)
            .with_context(|| format!("Failed to write genesis block to {}", path.display()))?;
        info!("genesis block written to {}", path.display());
    }

    Ok(())
}
