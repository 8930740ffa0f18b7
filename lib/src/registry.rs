//! The set of known networks and the one this process runs on.
//!
//! Selection happens once, early in startup. Readers get an `Arc` so a later switch can never
//! hand anyone a half-updated profile: they keep whichever one they already hold.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::address::Base58Decoder;
use crate::error::Result;
use crate::params::{ChainParams, Network, NetworkSpec};
use crate::pow::HeaderHasher;
use crate::seeds::BackdatedSeeds;

#[derive(Debug)]
pub struct NetworkRegistry {
    main: Arc<ChainParams>,
    testnet: Arc<ChainParams>,
    current: RwLock<Arc<ChainParams>>,
}

impl NetworkRegistry {
    /// Build and verify every supported network with the given header hash. Starts out on main.
    pub fn new(hasher: &dyn HeaderHasher) -> Result<Self> {
        let main =
            ChainParams::build(NetworkSpec::main(), hasher, &Base58Decoder, &BackdatedSeeds)?;
        let testnet =
            ChainParams::build(NetworkSpec::testnet(), hasher, &Base58Decoder, &BackdatedSeeds)?;
        Ok(NetworkRegistry::from_params(main, testnet))
    }

    pub fn from_params(main: ChainParams, testnet: ChainParams) -> Self {
        let main = Arc::new(main);
        NetworkRegistry {
            current: RwLock::new(Arc::clone(&main)),
            main,
            testnet: Arc::new(testnet),
        }
    }

    pub fn get(&self, network: Network) -> Arc<ChainParams> {
        match network {
            Network::Main => Arc::clone(&self.main),
            Network::Testnet => Arc::clone(&self.testnet),
        }
    }

    /// Make `network` the current one and return it.
    pub fn select(&self, network: Network) -> Arc<ChainParams> {
        let params = self.get(network);
        *self.current.write() = Arc::clone(&params);
        info!(%network, "selected network");
        params
    }

    /// Select from the `testnet` flag; absent or false means main.
    pub fn select_from_flag(&self, testnet: bool) -> Arc<ChainParams> {
        if testnet {
            self.select(Network::Testnet)
        } else {
            self.select(Network::Main)
        }
    }

    pub fn current(&self) -> Arc<ChainParams> {
        self.current.read().clone()
    }
}
