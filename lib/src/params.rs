//! Per-network constants.
//!
//! A [`NetworkSpec`] is plain data. [`ChainParams::build`] runs the construction shared by every
//! network (genesis verification under the injected header hasher, treasury decoding, seed
//! conversion) and produces the immutable profile the rest of the node reads.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::address::{Base58Type, DestinationDecoder, PrefixTable};
use crate::compact::Compact;
use crate::error::{ChainError, Result};
use crate::genesis::GenesisSpec;
use crate::pow::HeaderHasher;
use crate::script::Script;
use crate::seeds::{DnsSeed, SeedAddress, SeedConverter};
use crate::sha256::Hash;
use crate::types::Block;
use crate::{MAIN_POW_LIMIT, TEST_POW_LIMIT, U256};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Main,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Main => f.write_str("main"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            other => Err(ChainError::UnknownNetwork(other.to_owned())),
        }
    }
}

/// The constants that make one network different from another.
#[derive(Clone, Debug)]
pub struct NetworkSpec {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_pubkey: &'static str,
    pub default_port: u16,
    pub rpc_port: u16,
    pub pow_limit: U256,
    pub data_dir: &'static str,
    pub treasury_address: &'static str,
    /// kept verbatim, never decoded
    pub pool_dummy_address: &'static str,
    pub genesis: GenesisSpec,
    pub prefixes: PrefixTable,
    pub dns_seeds: Vec<DnsSeed>,
    /// packed IPv4 addresses, see [`crate::seeds::convert_seeds`]
    pub fixed_seeds: &'static [u32],
    pub pool_max_transactions: u32,
    pub last_pow_block: u32,
    pub pos_start_block: u32,
}

const GENESIS_MESSAGE: &str = "1525842106 seconds since Jan 01 1970. (UTC)";
const GENESIS_TIME: u32 = 1525842106;
const GENESIS_MERKLE_ROOT: &str =
    "0492a565583151305c2246f03a4fa2297a90b4633e4f5da358b23d9691e86fca";

impl NetworkSpec {
    pub fn main() -> Self {
        NetworkSpec {
            network: Network::Main,
            // rarely used upper ASCII, not valid UTF-8, a large 4-byte int at any alignment
            message_start: [0xA1, 0xA2, 0xB3, 0xC5],
            alert_pubkey: "045f6230f02f5199e65e3a66751d3a0c6cb00d5ea047fb7b887599157e2d9c2d598d477d98b8aa852ea2a5a8cc98a119d2f6fa8364105415d85d65e85fe6ee0cc3",
            default_port: 11235,
            rpc_port: 53211,
            pow_limit: MAIN_POW_LIMIT,
            data_dir: "",
            treasury_address: "APZg5J9U67fdCRre7oj9KqzpnLqP5REwjx",
            pool_dummy_address: "AHhWC9PRgMzm6z5Xx3zjCSTG5zJ5u71UbL",
            genesis: GenesisSpec {
                message: GENESIS_MESSAGE,
                tx_time: GENESIS_TIME,
                version: 1,
                time: GENESIS_TIME,
                bits: Compact::from_target(MAIN_POW_LIMIT),
                nonce: 1010568,
                expected_hash: "00004cd62c655e1492e4d87736f23fdd6ad260980007b72bc33373aed2b79258",
                expected_merkle_root: GENESIS_MERKLE_ROOT,
            },
            prefixes: PrefixTable::default()
                .with(Base58Type::PubkeyAddress, &[23])
                .with(Base58Type::ScriptAddress, &[16])
                .with(Base58Type::SecretKey, &[63])
                .with(Base58Type::StealthAddress, &[75])
                .with(Base58Type::ExtPublicKey, &[0x04, 0x88, 0xB2, 0x1E])
                .with(Base58Type::ExtSecretKey, &[0x04, 0x88, 0xAD, 0xE4]),
            dns_seeds: vec![DnsSeed::new("1", "167.99.183.76")],
            fixed_seeds: &[],
            pool_max_transactions: 3,
            last_pow_block: 100,
            pos_start_block: 2,
        }
    }

    /// Main with its own magic, ports, prefixes and a re-mined genesis, and no seeds. Proof of
    /// work never ends.
    pub fn testnet() -> Self {
        let main = NetworkSpec::main();
        NetworkSpec {
            network: Network::Testnet,
            message_start: [0x3a, 0xd1, 0xca, 0x4a],
            alert_pubkey: "0435e550759fa941172546f9930d0f30e64c4633bd4a0d5f4388567d45e58f490c78cca77cb5f56f9fb25f26bf89eb6c9efe8bc0eb327b1d4078c67ba56c79c870",
            default_port: 5112,
            rpc_port: 2245,
            pow_limit: TEST_POW_LIMIT,
            data_dir: "testnet",
            treasury_address: "aWsdgHxx8dCDwBoPEBfGNHPPnLrSUdsr6B",
            genesis: GenesisSpec {
                bits: Compact::from_target(TEST_POW_LIMIT),
                time: GENESIS_TIME,
                nonce: 3363,
                expected_hash: "00608a61e6795d83dd3ec9db646bd9658f4f51e64addfecd5684ea83c8bd63c7",
                ..main.genesis
            },
            prefixes: PrefixTable::default()
                .with(Base58Type::PubkeyAddress, &[83])
                .with(Base58Type::ScriptAddress, &[114])
                .with(Base58Type::SecretKey, &[125])
                .with(Base58Type::StealthAddress, &[137])
                .with(Base58Type::ExtPublicKey, &[0x04, 0x35, 0x87, 0xCF])
                .with(Base58Type::ExtSecretKey, &[0x04, 0x35, 0x83, 0x94]),
            dns_seeds: Vec::new(),
            fixed_seeds: &[],
            last_pow_block: 0x7fff_ffff,
            ..main
        }
    }

    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Main => NetworkSpec::main(),
            Network::Testnet => NetworkSpec::testnet(),
        }
    }
}

/// Everything a node needs to know about the network it runs on. Immutable once built.
#[derive(Clone, Debug)]
pub struct ChainParams {
    network: Network,
    message_start: [u8; 4],
    alert_pubkey: Vec<u8>,
    default_port: u16,
    rpc_port: u16,
    pow_limit: U256,
    data_dir: String,
    prefixes: PrefixTable,
    dns_seeds: Vec<DnsSeed>,
    fixed_seeds: Vec<SeedAddress>,
    genesis: Block,
    genesis_hash: Hash,
    treasury_address: String,
    treasury_script: Script,
    pool_dummy_address: String,
    pool_max_transactions: u32,
    last_pow_block: u32,
    pos_start_block: u32,
}

impl ChainParams {
    /// Verify the genesis block and resolve everything derived from the constants. Fails on the
    /// first violated invariant. `hasher` must be the header hash the network was mined with, or
    /// the genesis literal will not verify.
    pub fn build(
        spec: NetworkSpec,
        hasher: &dyn HeaderHasher,
        decoder: &dyn DestinationDecoder,
        seeds: &dyn SeedConverter,
    ) -> Result<Self> {
        let network = spec.network;
        debug!(%network, "building chain parameters");

        let (genesis, genesis_hash) = spec.genesis.verify(network, hasher, spec.pow_limit)?;

        if let Some(prefix) = spec.prefixes.find_duplicate() {
            let prefix = hex::encode(prefix);
            error!(%network, %prefix, "address prefix used twice");
            return Err(ChainError::DuplicatePrefix { network, prefix });
        }

        let treasury_script = decoder
            .decode_destination(spec.treasury_address, &spec.prefixes)
            .inspect_err(|e| error!(%network, "treasury address rejected: {e}"))?;

        let alert_pubkey = hex::decode(spec.alert_pubkey)?;
        let fixed_seeds = seeds.convert(spec.fixed_seeds, spec.default_port);

        info!(
            %network,
            %genesis_hash,
            port = spec.default_port,
            bits = %genesis.header.bits,
            "chain parameters verified"
        );

        Ok(ChainParams {
            network,
            message_start: spec.message_start,
            alert_pubkey,
            default_port: spec.default_port,
            rpc_port: spec.rpc_port,
            pow_limit: spec.pow_limit,
            data_dir: spec.data_dir.to_owned(),
            prefixes: spec.prefixes,
            dns_seeds: spec.dns_seeds,
            fixed_seeds,
            genesis,
            genesis_hash,
            treasury_address: spec.treasury_address.to_owned(),
            treasury_script,
            pool_dummy_address: spec.pool_dummy_address.to_owned(),
            pool_max_transactions: spec.pool_max_transactions,
            last_pow_block: spec.last_pow_block,
            pos_start_block: spec.pos_start_block,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    pub fn pow_limit(&self) -> U256 {
        self.pow_limit
    }

    /// sub-directory for this network's data, empty for main
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        self.prefixes.get(kind)
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SeedAddress] {
        &self.fixed_seeds
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    pub fn treasury_address(&self) -> &str {
        &self.treasury_address
    }

    /// script the protocol-level treasury reward pays to
    pub fn treasury_script(&self) -> &Script {
        &self.treasury_script
    }

    /// placeholder address of the mixing pool; stored as is, not a valid address
    pub fn pool_dummy_address(&self) -> &str {
        &self.pool_dummy_address
    }

    pub fn pool_max_transactions(&self) -> u32 {
        self.pool_max_transactions
    }

    /// height of the last block that may be mined with proof of work
    pub fn last_pow_block(&self) -> u32 {
        self.last_pow_block
    }

    pub fn pos_start_block(&self) -> u32 {
        self.pos_start_block
    }
}
