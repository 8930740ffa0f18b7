//! Test doubles.

use std::collections::HashMap;

use crate::pow::{HeaderHasher, Sha256dHasher};
use crate::sha256::Hash;
use crate::types::BlockHeader;

/// SHA-256d of the main genesis header as built by `NetworkSpec::main()`.
pub const MAIN_HEADER_DIGEST: &str =
    "30a57093f419f805ca3ec01cf86c04104e92dca55f67f9d7855f2ef20a54a3be";
/// SHA-256d of the test genesis header as built by `NetworkSpec::testnet()`.
pub const TEST_HEADER_DIGEST: &str =
    "ae180b938e77be57dec43be6a9ef830a4268ab7561b9d77c872c8c1720580176";
pub const MAIN_GENESIS_HASH: &str =
    "00004cd62c655e1492e4d87736f23fdd6ad260980007b72bc33373aed2b79258";
pub const TEST_GENESIS_HASH: &str =
    "00608a61e6795d83dd3ec9db646bd9658f4f51e64addfecd5684ea83c8bd63c7";

/// Stands in for the network's header hash: answers the recorded identity hash for headers whose
/// bytes are exactly the recorded ones, and plain SHA-256d for anything else.
pub struct RecordedHasher {
    known: HashMap<Hash, Hash>,
}

impl RecordedHasher {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let known = entries
            .iter()
            .map(|(digest, identity)| {
                (Hash::from_hex(digest).unwrap(), Hash::from_hex(identity).unwrap())
            })
            .collect();
        RecordedHasher { known }
    }

    /// both genesis headers
    pub fn networks() -> Self {
        RecordedHasher::new(&[
            (MAIN_HEADER_DIGEST, MAIN_GENESIS_HASH),
            (TEST_HEADER_DIGEST, TEST_GENESIS_HASH),
        ])
    }
}

impl HeaderHasher for RecordedHasher {
    fn hash_header(&self, header: &BlockHeader) -> Hash {
        let digest = Sha256dHasher.hash_header(header);
        self.known.get(&digest).copied().unwrap_or(digest)
    }
}
