pub mod address;
pub mod compact;
pub mod error;
pub mod genesis;
pub mod params;
pub mod pow;
pub mod registry;
pub mod script;
pub mod seeds;
pub mod sha256;
#[cfg(test)]
mod testing;
pub mod types;
pub mod util;

use serde::{Deserialize, Serialize};
use uint::construct_uint;

construct_uint! {
    // construct an unsigned 256-bit integer
    // 4 x 64bit
    #[derive(Serialize, Deserialize)]
    pub struct U256(4);
}

/// seconds in a week, the unit used when backdating seed addresses
pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;
/// main network proof-of-work limit, `~0 >> 16`
pub const MAIN_POW_LIMIT: U256 = U256([
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0x0000_FFFF_FFFF_FFFF,
]);
/// test network proof-of-work limit, `~0 >> 8`
pub const TEST_POW_LIMIT: U256 = U256([
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0x00FF_FFFF_FFFF_FFFF,
]);
