//! Block identity hashing and the proof-of-work check.
//!
//! The hash a network commits to for its headers is supplied by the caller as a
//! [`HeaderHasher`]. A genesis literal only verifies under the hasher the network was mined with.

use crate::U256;
use crate::compact::Compact;
use crate::sha256::Hash;
use crate::types::{BlockHeader, Encodable};

/// Computes the identity hash of a serialized header.
pub trait HeaderHasher: Send + Sync {
    fn hash_header(&self, header: &BlockHeader) -> Hash;
}

/// SHA256(SHA256(header)). Useful for structural work on headers; the production networks do not
/// use it, so their genesis blocks will not verify under it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256dHasher;

impl HeaderHasher for Sha256dHasher {
    fn hash_header(&self, header: &BlockHeader) -> Hash {
        Hash::double_sha256(&header.to_bytes())
    }
}

/// `hash` satisfies `bits`, and `bits` is a valid target no easier than `pow_limit`.
pub fn check_proof_of_work(hash: Hash, bits: Compact, pow_limit: U256) -> bool {
    let target = bits.to_target();
    if target.negative || target.overflow || target.value.is_zero() || target.value > pow_limit {
        return false;
    }
    hash.matches_target(target.value)
}
