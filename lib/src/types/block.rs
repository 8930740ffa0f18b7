use crate::{
    compact::Compact,
    pow::HeaderHasher,
    sha256::Hash,
    types::{Encodable, Transaction, write_compact_size},
    util::{MerkleRoot, Saveable},
};

use byteorder::{LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::io::{Error as IoError, ErrorKind as IoErrorKind, Read, Result as IoResult, Write};

/// size of a serialized header in bytes
pub const HEADER_SIZE: usize = 80;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    /// the hash of the previous block, zero for the genesis block.
    pub prev_block_hash: Hash,
    /// the root of the Merkle tree built from the hashes of all transactions in this block.
    /// Changing any transaction changes the root and so the block hash.
    pub merkle_root: Hash,
    /// the time when the block was created.
    pub timestamp: u32,
    /// the target in compact form; the block hash has to be at or below it.
    pub bits: Compact,
    /// number only used once, searched for when mining.
    pub nonce: u32,
}

impl Block {
    pub fn new(header: BlockHeader, transactions: Vec<Transaction>) -> Self {
        Block {
            header,
            transactions,
        }
    }

    pub fn hash(&self, hasher: &dyn HeaderHasher) -> Hash {
        self.header.hash(hasher)
    }

    /// the merkle root recomputed from the transactions, not the one stored in the header
    pub fn compute_merkle_root(&self) -> MerkleRoot {
        MerkleRoot::calculate(&self.transactions)
    }
}

impl BlockHeader {
    pub fn new(
        version: i32,
        prev_block_hash: Hash,
        merkle_root: Hash,
        timestamp: u32,
        bits: Compact,
        nonce: u32,
    ) -> Self {
        BlockHeader {
            version,
            prev_block_hash,
            merkle_root,
            timestamp,
            bits,
            nonce,
        }
    }

    // Header = version || prev_hash || merkle_root || timestamp || bits || nonce
    pub fn hash(&self, hasher: &dyn HeaderHasher) -> Hash {
        hasher.hash_header(self)
    }
}

impl Encodable for BlockHeader {
    fn encode<W: Write>(&self, writer: &mut W) -> IoResult<()> {
        writer.write_i32::<LittleEndian>(self.version)?;
        writer.write_all(self.prev_block_hash.as_bytes())?;
        writer.write_all(self.merkle_root.as_bytes())?;
        writer.write_u32::<LittleEndian>(self.timestamp)?;
        writer.write_u32::<LittleEndian>(self.bits.to_consensus())?;
        writer.write_u32::<LittleEndian>(self.nonce)
    }
}

impl Encodable for Block {
    fn encode<W: Write>(&self, writer: &mut W) -> IoResult<()> {
        self.header.encode(writer)?;
        write_compact_size(writer, self.transactions.len() as u64)?;
        for transaction in &self.transactions {
            transaction.encode(writer)?;
        }
        Ok(())
    }
}

impl Saveable for Block {
    fn load<I: Read>(reader: I) -> IoResult<Self> {
        ciborium::de::from_reader(reader)
            .map_err(|_| IoError::new(IoErrorKind::InvalidData, "Failed to deserialize Block"))
    }
    fn save<O: Write>(&self, writer: O) -> IoResult<()> {
        ciborium::ser::into_writer(self, writer)
            .map_err(|_| IoError::new(IoErrorKind::InvalidData, "Failed to serialize Block"))
    }
}
