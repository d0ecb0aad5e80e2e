//! Commit/reveal for shuffle seeds.
//!
//! The dealer publishes [`commit`]`(seed)` before the hand and reveals the
//! seed afterwards; anyone can then run [`verify`] and replay the shuffle.
//! The commitment is the SHA-256 of the seed bytes in lowercase hex, so it can
//! also be checked with stock tools (`printf %s "$SEED" | sha256sum`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::errors::EngineError;

/// Hex-encoded SHA-256 of a seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Commitment(String);

impl Commitment {
    pub const HEX_LEN: usize = 64;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Commitment {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(EngineError::InvalidCommitment(s.to_string()));
        }
        Ok(Commitment(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for Commitment {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Commitment> for String {
    fn from(c: Commitment) -> Self {
        c.0
    }
}

impl AsRef<str> for Commitment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn commit(seed: &str) -> Commitment {
    Commitment(hex::encode(Sha256::digest(seed.as_bytes())))
}

/// True iff `commitment` is exactly `commit(seed)`.
pub fn verify(seed: &str, commitment: &str) -> bool {
    commit(seed).as_str() == commitment
}

/// A fresh 256-bit seed from the thread RNG, hex encoded.
pub fn generate_seed() -> String {
    hex::encode(rand::random::<[u8; 32]>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitment_of_empty_seed_is_sha256_of_nothing() {
        assert_eq!(
            commit("").as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn verify_is_exact() {
        let c = commit("abc");
        assert!(verify("abc", c.as_str()));
        assert!(!verify("abd", c.as_str()));
        assert!(!verify("abc", &c.as_str().to_uppercase()));
        assert!(!verify("abc", ""));
    }

    #[test]
    fn parse_normalises_case_and_rejects_junk() {
        let c = commit("seed");
        let parsed: Commitment = c.as_str().to_uppercase().parse().unwrap();
        assert_eq!(parsed, c);
        assert!("abc".parse::<Commitment>().is_err());
        assert!("z".repeat(64).parse::<Commitment>().is_err());
    }

    #[test]
    fn generated_seeds_are_distinct_hex() {
        let a = generate_seed();
        let b = generate_seed();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }
}
