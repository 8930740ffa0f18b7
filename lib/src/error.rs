use thiserror::Error;

use crate::compact::Compact;
use crate::params::Network;
use crate::sha256::Hash;

/// Everything that can go wrong while bootstrapping network parameters. None of these are
/// recoverable: they mean the binary was built with constants that disagree with the network.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("{network} genesis hash mismatch: expected {expected}, computed {actual}")]
    GenesisHashMismatch {
        network: Network,
        expected: Hash,
        actual: Hash,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {actual}")]
    GenesisMerkleMismatch {
        network: Network,
        expected: Hash,
        actual: Hash,
    },
    #[error("{network} genesis hash {hash} does not meet its target {bits}")]
    GenesisProofOfWork {
        network: Network,
        hash: Hash,
        bits: Compact,
    },
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("{network} uses prefix {prefix} for more than one address kind")]
    DuplicatePrefix { network: Network, prefix: String },
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid hash length: expected 32 bytes, got {0}")]
    InvalidHashLength(usize),
}

pub type Result<T> = std::result::Result<T, ChainError>;
