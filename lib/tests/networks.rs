mod common;

use advlib::address::{Base58Decoder, Base58Type};
use advlib::compact::Compact;
use advlib::params::{ChainParams, Network, NetworkSpec};
use advlib::pow::{Sha256dHasher, check_proof_of_work};
use advlib::registry::NetworkRegistry;
use advlib::script::Script;
use advlib::seeds::BackdatedSeeds;
use advlib::sha256::Hash;
use advlib::util::{MerkleRoot, Saveable};
use advlib::{MAIN_POW_LIMIT, TEST_POW_LIMIT};
use common::{MAIN_GENESIS_HASH, RecordedHasher, TEST_GENESIS_HASH};

const NETWORKS: [Network; 2] = [Network::Main, Network::Testnet];

fn registry() -> NetworkRegistry {
    NetworkRegistry::new(&RecordedHasher::networks()).unwrap()
}

#[test]
fn genesis_hashes_match_literals() {
    let hasher = RecordedHasher::networks();
    for (network, literal) in [
        (Network::Main, MAIN_GENESIS_HASH),
        (Network::Testnet, TEST_GENESIS_HASH),
    ] {
        let spec = NetworkSpec::for_network(network);
        assert_eq!(spec.genesis.expected_hash, literal);
        let block = spec.genesis.assemble();
        assert_eq!(block.hash(&hasher), Hash::from_hex(literal).unwrap());
    }
}

#[test]
fn genesis_meets_proof_of_work() {
    let registry = registry();
    for network in NETWORKS {
        let params = registry.get(network);
        let bits = params.genesis_block().header.bits;
        assert!(params.genesis_hash().matches_target(bits.to_target().value));
        assert!(check_proof_of_work(params.genesis_hash(), bits, params.pow_limit()));
    }
}

#[test]
fn sha256d_cannot_bootstrap_the_networks() {
    assert!(NetworkRegistry::new(&Sha256dHasher).is_err());
}

#[test]
fn genesis_merkle_roots_match_literals() {
    let registry = registry();
    for network in NETWORKS {
        let params = registry.get(network);
        let root = MerkleRoot::calculate(&params.genesis_block().transactions);
        assert_eq!(
            root.hash().to_string(),
            "0492a565583151305c2246f03a4fa2297a90b4633e4f5da358b23d9691e86fca"
        );
        assert_eq!(root.hash(), params.genesis_block().header.merkle_root);
    }
}

#[test]
fn main_genesis_end_to_end() {
    let spec = NetworkSpec::main();
    assert_eq!(spec.message_start, [0xA1, 0xA2, 0xB3, 0xC5]);
    assert_eq!(spec.default_port, 11235);
    assert_eq!(spec.genesis.time, 1525842106);
    assert_eq!(spec.genesis.nonce, 1010568);

    let hasher = RecordedHasher::networks();
    let expected = Hash::from_hex(MAIN_GENESIS_HASH).unwrap();
    let block = spec.genesis.assemble();
    assert_eq!(block.hash(&hasher), expected);
    assert_eq!(block.header.bits, Compact(0x1f00_ffff));

    let mut bumped = spec.genesis.clone();
    bumped.nonce += 1;
    let bumped_hash = bumped.assemble().hash(&hasher);
    assert_ne!(bumped_hash, block.hash(&hasher));
    assert_ne!(bumped_hash, expected);
    assert!(bumped.verify(Network::Main, &hasher, MAIN_POW_LIMIT).is_err());
}

#[test]
fn testnet_has_no_seeds_and_an_easier_limit() {
    let registry = registry();
    let main = registry.get(Network::Main);
    let test = registry.select(Network::Testnet);

    assert!(test.dns_seeds().is_empty());
    assert!(test.fixed_seeds().is_empty());
    assert!(!main.dns_seeds().is_empty());
    assert!(test.pow_limit() > main.pow_limit());
    assert_eq!(test.pow_limit(), TEST_POW_LIMIT);
    assert_eq!(main.pow_limit(), MAIN_POW_LIMIT);
    assert_eq!(test.genesis_block().header.bits, Compact(0x2000_ffff));
}

#[test]
fn select_round_trip_restores_main() {
    let registry = registry();
    let before = registry.current();

    registry.select(Network::Testnet);
    assert_ne!(registry.current().message_start(), before.message_start());

    let after = registry.select(Network::Main);
    assert_eq!(after.message_start(), before.message_start());
    assert_eq!(after.default_port(), before.default_port());
    assert_eq!(after.rpc_port(), before.rpc_port());
    assert_eq!(after.genesis_hash(), before.genesis_hash());
}

#[test]
fn prefixes_never_collide_across_networks() {
    let registry = registry();
    let (main, test) = (registry.get(Network::Main), registry.get(Network::Testnet));
    for kind in Base58Type::ALL {
        assert_ne!(main.base58_prefix(kind), test.base58_prefix(kind), "{kind}");
    }
    // and a main address does not decode on test
    assert!(test.prefixes().decode(main.treasury_address()).is_err());
    assert!(main.prefixes().decode(test.treasury_address()).is_err());
}

#[test]
fn prefixes_are_unique_within_a_network() {
    for network in NETWORKS {
        assert_eq!(NetworkSpec::for_network(network).prefixes.find_duplicate(), None);
    }
}

#[test]
fn treasury_scripts() {
    let registry = registry();
    let cases = [
        (Network::Main, "55725ac2efaa19c9c5a9883ef157d2d36adc5b70"),
        (Network::Testnet, "4acfd01198025899c1a288529556784230f77c32"),
    ];
    for (network, hash160) in cases {
        let hash: [u8; 20] = hex::decode(hash160).unwrap().try_into().unwrap();
        assert_eq!(registry.get(network).treasury_script(), &Script::p2pkh(&hash));
    }
}

#[test]
fn policy_thresholds() {
    let registry = registry();
    let (main, test) = (registry.get(Network::Main), registry.get(Network::Testnet));
    assert_eq!(main.last_pow_block(), 100);
    assert_eq!(test.last_pow_block(), 0x7fff_ffff);
    assert_eq!(main.pos_start_block(), 2);
    assert_eq!(main.pool_max_transactions(), 3);
    assert_eq!((test.default_port(), test.rpc_port()), (5112, 2245));
    assert_eq!(main.rpc_port(), 53211);
    assert_eq!(test.data_dir(), "testnet");
    assert_eq!(main.alert_pubkey().len(), 65);
    assert_eq!(test.alert_pubkey()[0], 0x04);
}

#[test]
fn main_fixed_seeds_are_empty() {
    let params = ChainParams::build(
        NetworkSpec::main(),
        &RecordedHasher::networks(),
        &Base58Decoder,
        &BackdatedSeeds,
    )
    .unwrap();
    assert!(params.fixed_seeds().is_empty());
    assert_eq!(params.dns_seeds()[0].host, "167.99.183.76");
}

#[test]
fn genesis_survives_cbor() {
    let registry = registry();
    let genesis = registry.current().genesis_block().clone();
    let mut buf = Vec::new();
    genesis.save(&mut buf).unwrap();
    let loaded = advlib::types::Block::load(buf.as_slice()).unwrap();
    assert_eq!(
        loaded.hash(&RecordedHasher::networks()),
        registry.current().genesis_hash()
    );
}
