//! # Chain Builder
//!
//! Turns dataset rows into linked [`StageRecord`]s. The builder is the only
//! place that owns the sequence counter; each call to
//! [`ChainBuilder::build_record`] takes the next number, draws a fresh
//! pseudo-hash and timestamp, and links to the previous record by copying
//! its hash.

use serde::{Deserialize, Serialize};

use crate::block::{BlockHeader, StageRecord};
use crate::config::{FIRST_BLOCK_NUMBER, STAGE_COUNT};
use crate::dataset::{Dataset, DatasetRow};
use crate::error::ChainError;
use crate::hash::PseudoHasher;
use crate::stage::Stage;
use crate::timestamp::{format_timestamp, Clock, LocalClock};

// ---------------------------------------------------------------------------
// SupplyChain
// ---------------------------------------------------------------------------

/// Ordered, fully built chain of stage records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyChain {
    records: Vec<StageRecord>,
}

impl SupplyChain {
    /// Appends a record to the chain tip.
    fn append(&mut self, record: StageRecord) {
        self.records.push(record);
    }

    /// All records in stage order.
    pub fn records(&self) -> &[StageRecord] {
        &self.records
    }

    /// Iterate records in stage order.
    pub fn iter(&self) -> std::slice::Iter<'_, StageRecord> {
        self.records.iter()
    }

    /// Returns the latest record, if any.
    pub fn tip(&self) -> Option<&StageRecord> {
        self.records.last()
    }

    /// Returns the chain height (number of records).
    pub fn height(&self) -> u64 {
        self.records.len() as u64
    }

    /// The record for `stage`, if present.
    pub fn get(&self, stage: Stage) -> Option<&StageRecord> {
        self.records.iter().find(|r| r.stage == stage)
    }
}

impl<'a> IntoIterator for &'a SupplyChain {
    type Item = &'a StageRecord;
    type IntoIter = std::slice::Iter<'a, StageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// ChainBuilder
// ---------------------------------------------------------------------------

/// Build context: sequence counter, hash source and clock.
#[derive(Debug, Clone)]
pub struct ChainBuilder<C = LocalClock> {
    next_number: u64,
    hasher: PseudoHasher,
    clock: C,
}

impl ChainBuilder<LocalClock> {
    /// Builder with a clock-seeded hasher and the local wall clock.
    pub fn new() -> Self {
        Self::with_parts(PseudoHasher::from_clock(), LocalClock)
    }
}

impl Default for ChainBuilder<LocalClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ChainBuilder<C> {
    /// Builder from an explicit hasher and clock.
    pub fn with_parts(hasher: PseudoHasher, clock: C) -> Self {
        Self {
            next_number: FIRST_BLOCK_NUMBER,
            hasher,
            clock,
        }
    }

    /// Sequence number the next record will receive.
    pub fn next_number(&self) -> u64 {
        self.next_number
    }

    /// Build one record from `row`, linked to `previous`.
    ///
    /// With no previous record the new record links to itself. Values are
    /// copied verbatim.
    pub fn build_record(&mut self, row: &DatasetRow, previous: Option<&StageRecord>) -> StageRecord {
        let number = self.next_number;
        self.next_number += 1;

        let hash = self.hasher.next_hash();
        let timestamp = format_timestamp(self.clock.now());
        let previous_hash = match previous {
            Some(prev) => prev.header.hash.clone(),
            None => hash.clone(),
        };

        tracing::debug!(number, stage = %row.stage, hash = %hash, "record built");

        StageRecord {
            header: BlockHeader {
                number,
                hash,
                previous_hash,
                timestamp,
            },
            stage: row.stage,
            fields: row.values.clone(),
        }
    }

    /// Build the full chain, one record per row.
    ///
    /// # Errors
    ///
    /// [`ChainError::IncompleteDataset`] unless there is exactly one row per
    /// stage, [`ChainError::StageOutOfOrder`] when a row is out of place.
    pub fn build(&mut self, dataset: &Dataset) -> Result<SupplyChain, ChainError> {
        if dataset.len() != STAGE_COUNT {
            return Err(ChainError::IncompleteDataset {
                expected: STAGE_COUNT,
                found: dataset.len(),
            });
        }
        for (index, (row, expected)) in dataset.rows().iter().zip(Stage::ALL).enumerate() {
            if row.stage != expected {
                return Err(ChainError::StageOutOfOrder {
                    index,
                    expected,
                    found: row.stage,
                });
            }
        }

        let mut chain = SupplyChain::default();
        for row in dataset.rows() {
            let record = self.build_record(row, chain.tip());
            chain.append(record);
        }

        tracing::debug!(height = chain.height(), "chain built");
        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::is_pseudo_hash;
    use crate::timestamp::FixedClock;
    use chrono::NaiveDate;

    fn fixed_builder(seed: u64) -> ChainBuilder<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|d| d.and_hms_opt(8, 30, 0))
            .expect("valid date");
        ChainBuilder::with_parts(PseudoHasher::from_seed(seed), FixedClock(at))
    }

    #[test]
    fn builds_seven_records_in_stage_order() {
        let chain = fixed_builder(1).build(&Dataset::builtin()).expect("build");
        assert_eq!(chain.height(), 7);
        let stages: Vec<Stage> = chain.iter().map(|r| r.stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
    }

    #[test]
    fn sequence_numbers_run_one_to_seven() {
        let chain = fixed_builder(2).build(&Dataset::builtin()).expect("build");
        let numbers: Vec<u64> = chain.iter().map(StageRecord::number).collect();
        assert_eq!(numbers, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn records_link_to_predecessor() {
        let chain = fixed_builder(3).build(&Dataset::builtin()).expect("build");
        for pair in chain.records().windows(2) {
            assert_eq!(pair[1].header.previous_hash, pair[0].header.hash);
        }
    }

    #[test]
    fn first_record_links_to_itself() {
        let chain = fixed_builder(4).build(&Dataset::builtin()).expect("build");
        let first = &chain.records()[0];
        assert!(first.is_self_linked());
        assert!(chain.records()[1..].iter().all(|r| !r.is_self_linked()));
    }

    #[test]
    fn headers_carry_pseudo_hashes_and_clock_time() {
        let chain = fixed_builder(5).build(&Dataset::builtin()).expect("build");
        for r in &chain {
            assert!(is_pseudo_hash(&r.header.hash));
            assert_eq!(r.header.timestamp, "20261016:08:30:00");
        }
    }

    #[test]
    fn fields_are_copied_verbatim() {
        let dataset = Dataset::builtin();
        let chain = fixed_builder(6).build(&dataset).expect("build");
        for (record, row) in chain.iter().zip(dataset.rows()) {
            assert_eq!(record.fields, row.values);
        }
    }

    #[test]
    fn counter_keeps_running_across_builds() {
        let mut builder = fixed_builder(7);
        builder.build(&Dataset::builtin()).expect("first build");
        assert_eq!(builder.next_number(), 8);
        let second = builder.build(&Dataset::builtin()).expect("second build");
        assert_eq!(second.records()[0].number(), 8);
    }

    #[test]
    fn same_seed_reproduces_chain() {
        let a = fixed_builder(9).build(&Dataset::builtin()).expect("build");
        let b = fixed_builder(9).build(&Dataset::builtin()).expect("build");
        assert_eq!(a, b);
    }

    #[test]
    fn get_finds_record_by_stage() {
        let chain = fixed_builder(10).build(&Dataset::builtin()).expect("build");
        let painting = chain.get(Stage::Painting).expect("painting record");
        assert_eq!(painting.number(), 4);
        assert_eq!(chain.tip().map(|r| r.stage), Some(Stage::Transaction));
    }

    #[test]
    fn short_dataset_is_rejected() {
        let mut rows = Dataset::builtin().rows().to_vec();
        rows.pop();
        let err = fixed_builder(11).build(&Dataset::new(rows)).unwrap_err();
        assert_eq!(
            err,
            ChainError::IncompleteDataset {
                expected: 7,
                found: 6
            }
        );
    }

    #[test]
    fn swapped_rows_are_rejected() {
        let mut rows = Dataset::builtin().rows().to_vec();
        rows.swap(1, 2);
        let err = fixed_builder(12).build(&Dataset::new(rows)).unwrap_err();
        assert_eq!(
            err,
            ChainError::StageOutOfOrder {
                index: 1,
                expected: Stage::Press,
                found: Stage::Welding
            }
        );
    }

    #[test]
    fn rejected_build_consumes_no_numbers() {
        let mut builder = fixed_builder(13);
        assert!(builder.build(&Dataset::default()).is_err());
        assert_eq!(builder.next_number(), 1);
    }
}
