//! Construction and verification of each network's first block.

use tracing::{debug, error};

use crate::compact::Compact;
use crate::error::{ChainError, Result};
use crate::U256;
use crate::params::Network;
use crate::pow::{HeaderHasher, check_proof_of_work};
use crate::script::Script;
use crate::sha256::Hash;
use crate::types::{
    Block, BlockHeader, OutPoint, Transaction, TransactionInput, TransactionOutput,
};

/// Number pushed ahead of the message in the genesis coinbase.
const COINBASE_MAGIC_NUMBER: i64 = 42;

/// Build the coinbase seeding a network: a single input spending nothing, with `message` in its
/// unlocking script, and a single empty output. It is never spendable.
pub fn coinbase(message: &str, time: u32) -> Transaction {
    let script_sig = Script::new()
        .push_int(0)
        .push_num(COINBASE_MAGIC_NUMBER)
        .push_slice(message.as_bytes());

    let input = TransactionInput {
        prev_output: OutPoint::null(),
        script_sig,
        sequence: u32::MAX,
    };

    Transaction::new(1, time, vec![input], vec![TransactionOutput::empty()], 0)
}

/// Everything that determines a genesis block, plus the two literals it has to reproduce.
#[derive(Clone, Debug)]
pub struct GenesisSpec {
    pub message: &'static str,
    pub tx_time: u32,
    pub version: i32,
    pub time: u32,
    pub bits: Compact,
    pub nonce: u32,
    pub expected_hash: &'static str,
    pub expected_merkle_root: &'static str,
}

impl GenesisSpec {
    pub fn assemble(&self) -> Block {
        let transactions = vec![coinbase(self.message, self.tx_time)];
        let mut block = Block::new(
            BlockHeader::new(
                self.version,
                Hash::zero(),
                Hash::zero(),
                self.time,
                self.bits,
                self.nonce,
            ),
            transactions,
        );
        block.header.merkle_root = block.compute_merkle_root().hash();
        block
    }

    /// Assemble the block and check it against the hardcoded merkle root and hash, then check the
    /// hash meets its own `bits`. Any failure means this build disagrees with the rest of the
    /// network about block zero.
    pub fn verify(
        &self,
        network: Network,
        hasher: &dyn HeaderHasher,
        pow_limit: U256,
    ) -> Result<(Block, Hash)> {
        let block = self.assemble();
        let hash = block.hash(hasher);
        debug!(%network, %hash, merkle_root = %block.header.merkle_root, "assembled genesis block");

        let expected = Hash::from_hex(self.expected_merkle_root)?;
        if block.header.merkle_root != expected {
            error!(
                %network,
                %expected,
                actual = %block.header.merkle_root,
                "genesis merkle root mismatch"
            );
            return Err(ChainError::GenesisMerkleMismatch {
                network,
                expected,
                actual: block.header.merkle_root,
            });
        }

        let expected = Hash::from_hex(self.expected_hash)?;
        if hash != expected {
            error!(%network, %expected, actual = %hash, "genesis hash mismatch");
            return Err(ChainError::GenesisHashMismatch {
                network,
                expected,
                actual: hash,
            });
        }

        if !check_proof_of_work(hash, block.header.bits, pow_limit) {
            error!(%network, %hash, bits = %block.header.bits, "genesis fails proof of work");
            return Err(ChainError::GenesisProofOfWork {
                network,
                hash,
                bits: block.header.bits,
            });
        }

        Ok((block, hash))
    }
}
