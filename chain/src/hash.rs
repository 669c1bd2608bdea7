//! # Pseudo-Hashes
//!
//! Block identifiers for the demo chain. A pseudo-hash is [`HASH_LENGTH`]
//! characters drawn uniformly from the 62-symbol alphanumeric alphabet.
//!
//! ## This is not a content hash
//!
//! Nothing about a record's fields goes into its pseudo-hash. Two records
//! with identical content get different identifiers, and editing a record
//! after the fact cannot be detected by recomputing anything. The chain only
//! shows *where* a real digest would sit, not what it would protect.
//!
//! The generator is seeded once, from the high-resolution system clock,
//! unless a fixed seed is supplied for reproducible runs.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{HASH_ALPHABET, HASH_LENGTH};

/// Source of pseudo-hashes for one chain build.
#[derive(Debug, Clone)]
pub struct PseudoHasher {
    rng: StdRng,
}

impl PseudoHasher {
    /// Seed from the current time in nanoseconds since the Unix epoch.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self::from_seed(nanos)
    }

    /// Seed explicitly. Equal seeds produce equal hash sequences.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next pseudo-hash.
    pub fn next_hash(&mut self) -> String {
        (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(HASH_LENGTH)
            .map(char::from)
            .collect()
    }
}

impl Default for PseudoHasher {
    fn default() -> Self {
        Self::from_clock()
    }
}

/// True when `s` has the shape of a pseudo-hash: right length, right alphabet.
pub fn is_pseudo_hash(s: &str) -> bool {
    s.len() == HASH_LENGTH && s.chars().all(|c| HASH_ALPHABET.contains(c))
}
