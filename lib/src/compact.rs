//! Compact difficulty encoding.
//!
//! A block header stores its target in 32 bits: the top byte is the size of the number in bytes,
//! the low 23 bits are the most significant bytes of the number, and bit 23 is a sign bit. The
//! encoding is lossy, only the three most significant bytes survive.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::U256;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Compact(pub u32);

/// Result of expanding a compact value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub value: U256,
    /// the sign bit was set on a non-zero mantissa
    pub negative: bool,
    /// the encoded number does not fit in 256 bits
    pub overflow: bool,
}

impl Compact {
    pub fn from_target(target: U256) -> Self {
        let mut size = target.bits().div_ceil(8);
        let mut mantissa = if size <= 3 {
            target.low_u64() << (8 * (3 - size))
        } else {
            (target >> (8 * (size - 3))).low_u64()
        } as u32;

        // the mantissa is signed, so a set high bit would read back negative
        if mantissa & SIGN_BIT != 0 {
            mantissa >>= 8;
            size += 1;
        }

        Compact(mantissa | ((size as u32) << 24))
    }

    pub fn to_target(self) -> Target {
        let size = (self.0 >> 24) as usize;
        let mut word = self.0 & MANTISSA_MASK;

        let value = if size <= 3 {
            word >>= 8 * (3 - size);
            U256::from(word)
        } else if size - 3 >= 32 {
            U256::zero()
        } else {
            U256::from(word) << (8 * (size - 3))
        };

        let negative = word != 0 && self.0 & SIGN_BIT != 0;
        let overflow = word != 0
            && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

        Target {
            value,
            negative,
            overflow,
        }
    }

    pub fn to_consensus(self) -> u32 {
        self.0
    }
}

impl From<U256> for Compact {
    fn from(target: U256) -> Self {
        Compact::from_target(target)
    }
}

impl fmt::Debug for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compact({:#010x})", self.0)
    }
}

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
