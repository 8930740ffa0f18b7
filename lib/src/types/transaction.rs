use crate::{
    script::Script,
    sha256::Hash,
    types::{Encodable, write_compact_size},
    util::Saveable,
};

use byteorder::{LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::io::{Error as IoError, ErrorKind as IoErrorKind, Read, Result as IoResult, Write};

/// A transaction in the proof-of-stake layout: unlike Bitcoin it carries its own timestamp right
/// after the version.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

/// Reference to an output of an earlier transaction.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OutPoint {
    pub txid: Hash,
    pub vout: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    pub prev_output: OutPoint,
    /// unlocking script; for a coinbase this is free-form data
    pub script_sig: Script,
    pub sequence: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionOutput {
    /// amount in the smallest unit
    pub value: i64,
    pub script_pubkey: Script,
}

impl OutPoint {
    /// the outpoint a coinbase input "spends"
    pub fn null() -> Self {
        OutPoint {
            txid: Hash::zero(),
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid == Hash::zero() && self.vout == u32::MAX
    }
}

impl TransactionOutput {
    /// zero value, empty script
    pub fn empty() -> Self {
        TransactionOutput {
            value: 0,
            script_pubkey: Script::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

impl Transaction {
    pub fn new(
        version: i32,
        time: u32,
        inputs: Vec<TransactionInput>,
        outputs: Vec<TransactionOutput>,
        lock_time: u32,
    ) -> Self {
        Transaction {
            version,
            time,
            inputs,
            outputs,
            lock_time,
        }
    }

    /// txid, double SHA-256 of the consensus encoding
    pub fn hash(&self) -> Hash {
        Hash::double_sha256(&self.to_bytes())
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prev_output.is_null()
    }
}

fn write_script<W: Write>(writer: &mut W, script: &Script) -> IoResult<()> {
    write_compact_size(writer, script.len() as u64)?;
    writer.write_all(script.as_bytes())
}

impl Encodable for Transaction {
    fn encode<W: Write>(&self, writer: &mut W) -> IoResult<()> {
        writer.write_i32::<LittleEndian>(self.version)?;
        writer.write_u32::<LittleEndian>(self.time)?;

        write_compact_size(writer, self.inputs.len() as u64)?;
        for input in &self.inputs {
            writer.write_all(input.prev_output.txid.as_bytes())?;
            writer.write_u32::<LittleEndian>(input.prev_output.vout)?;
            write_script(writer, &input.script_sig)?;
            writer.write_u32::<LittleEndian>(input.sequence)?;
        }

        write_compact_size(writer, self.outputs.len() as u64)?;
        for output in &self.outputs {
            writer.write_i64::<LittleEndian>(output.value)?;
            write_script(writer, &output.script_pubkey)?;
        }

        writer.write_u32::<LittleEndian>(self.lock_time)
    }
}

impl Saveable for Transaction {
    fn load<I: Read>(reader: I) -> IoResult<Self> {
        ciborium::de::from_reader(reader).map_err(|_| {
            IoError::new(
                IoErrorKind::InvalidData,
                "Failed to deserialize Transaction",
            )
        })
    }
    fn save<O: Write>(&self, writer: O) -> IoResult<()> {
        ciborium::ser::into_writer(self, writer)
            .map_err(|_| IoError::new(IoErrorKind::InvalidData, "Failed to serialize Transaction"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::new(
            1,
            1_000,
            vec![TransactionInput {
                prev_output: OutPoint::null(),
                script_sig: Script::new().push_int(0),
                sequence: u32::MAX,
            }],
            vec![TransactionOutput::empty()],
            0,
        )
    }

    #[test]
    fn encoding_layout() {
        let bytes = sample().to_bytes();
        // version + time + count + outpoint + script(1+1) + sequence + count + value + script(1) + lock time
        assert_eq!(bytes.len(), 4 + 4 + 1 + 36 + 2 + 4 + 1 + 8 + 1 + 4);
        assert_eq!(&bytes[..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..8], &1_000u32.to_le_bytes());
        assert_eq!(&bytes[41..45], &[0xff; 4]);
    }

    #[test]
    fn coinbase_detection() {
        let mut tx = sample();
        assert!(tx.is_coinbase());
        tx.inputs[0].prev_output.vout = 0;
        assert!(!tx.is_coinbase());
    }

    #[test]
    fn time_changes_txid() {
        let mut tx = sample();
        let before = tx.hash();
        tx.time += 1;
        assert_ne!(before, tx.hash());
    }

    #[test]
    fn cbor_save_and_load() {
        let tx = sample();
        let mut buf = Vec::new();
        tx.save(&mut buf).unwrap();
        assert_eq!(Transaction::load(buf.as_slice()).unwrap(), tx);
    }
}
