//! Base58Check addresses and the per-network prefix table.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::error::{ChainError, Result};
use crate::script::Script;

const CHECKSUM_LEN: usize = 4;

/// The kinds of data a network gives its own Base58 version prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    StealthAddress,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 6] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::StealthAddress,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Base58Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Base58Type::PubkeyAddress => "pubkey-address",
            Base58Type::ScriptAddress => "script-address",
            Base58Type::SecretKey => "secret-key",
            Base58Type::StealthAddress => "stealth-address",
            Base58Type::ExtPublicKey => "ext-public-key",
            Base58Type::ExtSecretKey => "ext-secret-key",
        };
        f.write_str(name)
    }
}

/// Version prefix for every [`Base58Type`]. An unset kind has an empty prefix and never matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrefixTable {
    prefixes: [Vec<u8>; 6],
}

impl PrefixTable {
    pub fn with(mut self, kind: Base58Type, prefix: &[u8]) -> Self {
        self.prefixes[kind.index()] = prefix.to_vec();
        self
    }

    pub fn get(&self, kind: Base58Type) -> &[u8] {
        &self.prefixes[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Base58Type, &[u8])> {
        Base58Type::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// the first prefix used by two kinds, if any
    pub fn find_duplicate(&self) -> Option<&[u8]> {
        let prefixes: Vec<&[u8]> = self
            .iter()
            .map(|(_, prefix)| prefix)
            .filter(|prefix| !prefix.is_empty())
            .collect();
        for (i, prefix) in prefixes.iter().enumerate() {
            if prefixes[i + 1..].contains(prefix) {
                return Some(*prefix);
            }
        }
        None
    }

    /// Base58Check encode `payload` under the prefix registered for `kind`.
    pub fn encode(&self, kind: Base58Type, payload: &[u8]) -> String {
        let mut data = self.get(kind).to_vec();
        data.extend_from_slice(payload);
        let check = checksum(&data);
        data.extend_from_slice(&check);
        bs58::encode(data).into_string()
    }

    /// Decode a Base58Check string, verify the checksum and match its prefix. When prefixes of
    /// different lengths share leading bytes the longest one wins.
    pub fn decode(&self, address: &str) -> Result<(Base58Type, Vec<u8>)> {
        let decoded = bs58::decode(address)
            .into_vec()
            .map_err(|e| ChainError::InvalidAddress(format!("{address}: {e}")))?;
        if decoded.len() <= CHECKSUM_LEN {
            return Err(ChainError::InvalidAddress(format!("{address}: too short")));
        }

        let (body, check) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
        if checksum(body) != check {
            return Err(ChainError::InvalidAddress(format!("{address}: bad checksum")));
        }

        self.iter()
            .filter(|(_, prefix)| !prefix.is_empty() && body.starts_with(prefix))
            .max_by_key(|(_, prefix)| prefix.len())
            .map(|(kind, prefix)| (kind, body[prefix.len()..].to_vec()))
            .ok_or_else(|| ChainError::InvalidAddress(format!("{address}: unknown prefix")))
    }
}

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&second[..CHECKSUM_LEN]);
    out
}

/// Turns a human readable address into the script that pays to it.
pub trait DestinationDecoder {
    fn decode_destination(&self, address: &str, prefixes: &PrefixTable) -> Result<Script>;
}

/// Legacy addresses: pubkey hash to P2PKH, script hash to P2SH.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base58Decoder;

impl DestinationDecoder for Base58Decoder {
    fn decode_destination(&self, address: &str, prefixes: &PrefixTable) -> Result<Script> {
        let (kind, payload) = prefixes.decode(address)?;
        let hash: [u8; 20] = payload.as_slice().try_into().map_err(|_| {
            ChainError::InvalidAddress(format!("{address}: payload is {} bytes", payload.len()))
        })?;
        match kind {
            Base58Type::PubkeyAddress => Ok(Script::p2pkh(&hash)),
            Base58Type::ScriptAddress => Ok(Script::p2sh(&hash)),
            other => Err(ChainError::InvalidAddress(format!(
                "{address}: {other} is not a destination"
            ))),
        }
    }
}
