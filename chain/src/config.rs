//! # Demo Configuration & Constants
//!
//! Every fixed value of the demo lives here: hash shape, timestamp layout,
//! the stock credential pair and the size of the chain. Runtime knobs are
//! CLI flags on the console binary, not environment variables.

// ---------------------------------------------------------------------------
// Pseudo-Hash
// ---------------------------------------------------------------------------

/// Length of every pseudo-hash, in characters.
pub const HASH_LENGTH: usize = 32;

/// Symbols a pseudo-hash may contain: digits, lowercase and uppercase ASCII.
pub const HASH_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Size of [`HASH_ALPHABET`].
pub const HASH_ALPHABET_SIZE: usize = 62;

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// `chrono` format pattern for block timestamps, e.g. `20261016:09:05:03`.
/// Local wall-clock time, no zone marker.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d:%H:%M:%S";

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

/// Username accepted by the console when no override is given.
pub const DEFAULT_USERNAME: &str = "username";

/// Password accepted by the console when no override is given.
pub const DEFAULT_PASSWORD: &str = "password";

// ---------------------------------------------------------------------------
// Chain Shape
// ---------------------------------------------------------------------------

/// Number of stages, and therefore records, in a complete chain.
pub const STAGE_COUNT: usize = 7;

/// Sequence number assigned to the first record a builder produces.
pub const FIRST_BLOCK_NUMBER: u64 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_size_matches_alphabet() {
        assert_eq!(HASH_ALPHABET.len(), HASH_ALPHABET_SIZE);
        assert!(HASH_ALPHABET.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
