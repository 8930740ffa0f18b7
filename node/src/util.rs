use std::panic;

use advlib::address::Base58Type;
use advlib::params::ChainParams;
use tracing::*;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr, filtered by RUST_LOG or the configured level.
pub fn setup_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Make sure tracing is able to log panics occurring in the node
pub fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        error!("Application panicked!");
        error!("Panic info: {:?}", panic_info);
        error!("Backtrace: {:?}", backtrace);
    }));
}

/// Summary of the profile consumers will see.
pub fn report(params: &ChainParams) {
    info!(
        network = %params.network(),
        magic = %hex::encode(params.message_start()),
        port = params.default_port(),
        rpc_port = params.rpc_port(),
        genesis = %params.genesis_hash(),
        "active network"
    );
    info!(
        last_pow_block = params.last_pow_block(),
        pos_start_block = params.pos_start_block(),
        pool_max_transactions = params.pool_max_transactions(),
        treasury = params.treasury_address(),
        "policy"
    );
    for kind in Base58Type::ALL {
        debug!(%kind, prefix = %hex::encode(params.base58_prefix(kind)), "address prefix");
    }
    for seed in params.dns_seeds() {
        debug!(seed = %seed.name, host = %seed.host, "dns seed");
    }
    for seed in params.fixed_seeds() {
        debug!(addr = %seed.addr, last_seen = %seed.last_seen, "fixed seed");
    }
}
