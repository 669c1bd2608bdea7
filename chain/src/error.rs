//! Error types for chain construction.
//!
//! Building from the built-in dataset cannot fail. These variants cover
//! datasets assembled by hand that break the fixed stage order.

use thiserror::Error;

use crate::stage::Stage;

/// Errors returned by [`ChainBuilder::build`](crate::chain::ChainBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The dataset does not hold exactly one row per stage.
    #[error("dataset holds {found} rows, a complete chain needs {expected}")]
    IncompleteDataset {
        /// Rows a complete chain needs.
        expected: usize,
        /// Rows the dataset actually holds.
        found: usize,
    },

    /// A row sits at a position that belongs to another stage.
    #[error("dataset row {index} is a {found} row, expected {expected}")]
    StageOutOfOrder {
        /// Zero-based row position.
        index: usize,
        /// Stage that belongs at this position.
        expected: Stage,
        /// Stage the row was tagged with.
        found: Stage,
    },
}
