use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::U256;
use crate::error::{ChainError, Result};

/// A 256-bit digest kept in the byte order it comes out of SHA-256. Displayed reversed, the way
/// block explorers and the hardcoded genesis literals show it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hash([u8; 32]);

impl Hash {
    /// SHA256(SHA256(data))
    pub fn double_sha256(data: &[u8]) -> Self {
        let first = Sha256::digest(data);
        let second = Sha256::digest(first);
        Hash(second.into())
    }

    pub fn zero() -> Self {
        Hash([0; 32])
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse a hash written in display order, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = hex::decode(s)?;
        if bytes.len() != 32 {
            return Err(ChainError::InvalidHashLength(bytes.len()));
        }
        bytes.reverse();
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(Hash(out))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// the digest read as a little-endian 256-bit number
    pub fn to_u256(&self) -> U256 {
        U256::from_little_endian(&self.0)
    }

    /// check if the hash is at or below the target
    pub fn matches_target(&self, target: U256) -> bool {
        self.to_u256() <= target
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut reversed = self.0;
        reversed.reverse();
        write!(f, "{}", hex::encode(reversed))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({self})")
    }
}
