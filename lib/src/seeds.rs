//! Bootstrap peers.
//!
//! A node only needs to reach one or two seeds: once connected it learns a pile of addresses with
//! newer timestamps. Fixed seeds are therefore given a random "last seen" time between one and
//! two weeks ago, so fresh nodes do not all treat every seed as equally recent.

use std::net::{Ipv4Addr, SocketAddrV4};

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ONE_WEEK;

/// A DNS seed: a host queried for peer addresses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        DnsSeed {
            name: name.to_owned(),
            host: host.to_owned(),
        }
    }
}

/// A peer address ready to hand to the address manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub addr: SocketAddrV4,
    pub last_seen: DateTime<Utc>,
}

/// Expand a packed IPv4 table into seed addresses.
///
/// Each word holds one address with the first octet in its most significant byte, so
/// `0xA763B74C` is `167.99.183.76`. This is independent of the host's endianness.
pub fn convert_seeds<R: Rng + ?Sized>(
    table: &[u32],
    port: u16,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<SeedAddress> {
    table
        .iter()
        .map(|&word| {
            let backdate = rng.gen_range(0..ONE_WEEK) + ONE_WEEK;
            SeedAddress {
                addr: SocketAddrV4::new(Ipv4Addr::from(word), port),
                last_seen: now - Duration::seconds(backdate),
            }
        })
        .collect()
}

/// How a profile turns its packed seed table into addresses.
pub trait SeedConverter {
    fn convert(&self, table: &[u32], port: u16) -> Vec<SeedAddress>;
}

/// Backdates against the wall clock with the thread RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct BackdatedSeeds;

impl SeedConverter for BackdatedSeeds {
    fn convert(&self, table: &[u32], port: u16) -> Vec<SeedAddress> {
        convert_seeds(table, port, Utc::now(), &mut rand::thread_rng())
    }
}
