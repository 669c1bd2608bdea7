// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # carchain — Supply Chain Records, Linked
//!
//! A teaching model of a hash-linked chain: seven fixed stages of car
//! manufacturing and commerce, each stored as one record that carries the
//! previous record's identifier.
//!
//! The identifiers are random pseudo-hashes, not digests of the record
//! contents, and the first record points at itself. Nothing is verified,
//! persisted or shared between processes. Read the chain as a picture of
//! where integrity data would go, not as a ledger.
//!
//! ## Architecture
//!
//! - **config** — Fixed constants: hash shape, timestamp pattern, credentials.
//! - **stage** — The seven stages and their presentation data.
//! - **dataset** — The built-in input table, one row per stage.
//! - **hash** — Random alphanumeric pseudo-hashes.
//! - **timestamp** — Local wall-clock timestamps.
//! - **block** — Record header and stage record types.
//! - **chain** — The builder that numbers and links records.
//! - **report** — Console rendering of the dataset and the chain.
//! - **auth** — The console's credential check.
//! - **error** — Errors for hand-assembled datasets.
//!
//! ## Data Flow
//!
//! ```text
//! Dataset rows → ChainBuilder → SupplyChain → report::write_*
//!                  (stage N reads stage N-1's hash)
//! ```

pub mod auth;
pub mod block;
pub mod chain;
pub mod config;
pub mod dataset;
pub mod error;
pub mod hash;
pub mod report;
pub mod stage;
pub mod timestamp;

pub use auth::{authenticate, Credentials};
pub use block::{BlockHeader, StageRecord};
pub use chain::{ChainBuilder, SupplyChain};
pub use dataset::{Dataset, DatasetRow};
pub use error::ChainError;
pub use hash::PseudoHasher;
pub use report::Palette;
pub use stage::Stage;
