use serde::{Deserialize, Serialize};

use std::{
    fs::File,
    io::{Read, Result, Write},
    path::Path,
};

use crate::sha256::Hash;
use crate::types::Transaction;

#[derive(Debug, Clone, Deserialize, Serialize, Copy, Eq, PartialEq)]
pub struct MerkleRoot(Hash);

impl MerkleRoot {
    /// Hash pairs of txids layer by layer until one is left. An odd node is paired with itself.
    pub fn calculate(transactions: &[Transaction]) -> Self {
        let mut layer: Vec<Hash> = transactions.iter().map(Transaction::hash).collect();

        if layer.is_empty() {
            return MerkleRoot(Hash::zero());
        }

        while layer.len() > 1 {
            let mut new_layer = Vec::with_capacity(layer.len().div_ceil(2));
            for pair in layer.chunks(2) {
                let left = pair[0];
                let right = pair.get(1).unwrap_or(&pair[0]);
                let mut concat = [0u8; 64];
                concat[..32].copy_from_slice(left.as_bytes());
                concat[32..].copy_from_slice(right.as_bytes());
                new_layer.push(Hash::double_sha256(&concat));
            }
            layer = new_layer
        }
        MerkleRoot(layer[0])
    }

    pub fn hash(&self) -> Hash {
        self.0
    }
}

pub trait Saveable
where
    Self: Sized,
{
    fn load<I: Read>(reader: I) -> Result<Self>;
    fn save<O: Write>(&self, writer: O) -> Result<()>;

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(&path)?;
        self.save(file)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;
        Self::load(file)
    }
}
