mod block;
mod transaction;

pub use block::*;
pub use transaction::*;

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{Result as IoResult, Write};

/// Write a CompactSize length prefix.
pub fn write_compact_size<W: Write>(writer: &mut W, n: u64) -> IoResult<()> {
    match n {
        0..=0xfc => writer.write_u8(n as u8),
        0xfd..=0xffff => {
            writer.write_u8(0xfd)?;
            writer.write_u16::<LittleEndian>(n as u16)
        }
        0x1_0000..=0xffff_ffff => {
            writer.write_u8(0xfe)?;
            writer.write_u32::<LittleEndian>(n as u32)
        }
        _ => {
            writer.write_u8(0xff)?;
            writer.write_u64::<LittleEndian>(n)
        }
    }
}

/// Consensus serialization, the bytes that get hashed.
pub trait Encodable {
    fn encode<W: Write>(&self, writer: &mut W) -> IoResult<()>;

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.encode(&mut bytes);
        bytes
    }
}
