//! Identicon codes and their derivation from strings.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha512};

use crate::error::{IdenticonError, Result};

/// The 64-bit seed of an identicon.
///
/// Everything visual is a pure function of this value; see
/// [`Recipe::decode`](crate::types::Recipe::decode) for the bit layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Code(pub u64);

impl Code {
    /// Derive the code for an arbitrary string.
    ///
    /// Hashes the UTF-8 bytes with SHA-512 and reads the last 8 digest bytes
    /// as a big-endian integer.
    pub fn derive(input: &str) -> Self {
        let digest = Sha512::digest(input.as_bytes());
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&digest[digest.len() - 8..]);
        Self(u64::from_be_bytes(tail))
    }

    /// The raw integer value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Extract `width` bits starting at `offset` (bit 0 is least significant).
    pub(crate) const fn bits(self, offset: u32, width: u32) -> u64 {
        (self.0 >> offset) & ((1 << width) - 1)
    }

    pub(crate) const fn flag(self, offset: u32) -> bool {
        self.bits(offset, 1) == 1
    }
}

impl From<u64> for Code {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for Code {
    type Err = IdenticonError;

    /// Parse a hex code, with or without a `0x` prefix.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        u64::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|e| IdenticonError::Config {
                message: format!("Invalid code '{}': {}", s, e),
                help: Some("Codes are up to 16 hex digits, e.g. 0xa538327af927da3e".to_string()),
            })
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
