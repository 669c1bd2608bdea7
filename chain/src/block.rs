//! # Stage Records
//!
//! A record is the unit of the demo chain: a common header plus the text
//! values of one stage.
//!
//! ## Record Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │  BlockHeader                                     │
//! │  ├── number: u64          (1-based, per builder) │
//! │  ├── hash: String         (pseudo-hash)          │
//! │  ├── previous_hash: String                       │
//! │  └── timestamp: String    (YYYYMMDD:HH:MM:SS)    │
//! ├──────────────────────────────────────────────────┤
//! │  stage: Stage                                    │
//! │  fields: Vec<String>      (verbatim text)        │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! ## Linking
//!
//! `previous_hash` is a copy of the prior record's `hash`. The first record
//! of a chain points at itself: its `previous_hash` equals its own `hash`
//! rather than an all-zero genesis value.

use serde::{Deserialize, Serialize};

use crate::stage::{FieldSpec, Stage};

/// Header shared by every stage record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Sequence number, counting every record the builder produced.
    pub number: u64,
    /// Pseudo-hash identifying this record.
    pub hash: String,
    /// Pseudo-hash of the previous record (own hash for the first record).
    pub previous_hash: String,
    /// Creation time, local wall clock.
    pub timestamp: String,
}

/// One block of the supply chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    /// Chain linkage and identity.
    pub header: BlockHeader,
    /// Stage this record belongs to.
    pub stage: Stage,
    /// Stage values in the stage's field order.
    pub fields: Vec<String>,
}

impl StageRecord {
    /// Sequence number of the record.
    pub fn number(&self) -> u64 {
        self.header.number
    }

    /// Pseudo-hash of the record.
    pub fn hash(&self) -> &str {
        &self.header.hash
    }

    /// True when the record points at itself, as the first record does.
    pub fn is_self_linked(&self) -> bool {
        self.header.hash == self.header.previous_hash
    }

    /// Value stored under `label`, if the stage defines that label.
    ///
    /// A label the stage defines but the dataset left out reads as `""`.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.labeled_fields()
            .find(|(spec, _)| spec.label == label)
            .map(|(_, value)| value)
    }

    /// Stage field specs paired with their values, in print order.
    pub fn labeled_fields(&self) -> impl Iterator<Item = (&'static FieldSpec, &str)> + '_ {
        self.stage
            .descriptor()
            .fields
            .iter()
            .enumerate()
            .map(move |(i, spec)| (spec, self.fields.get(i).map_or("", String::as_str)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(stage: Stage, fields: &[&str]) -> StageRecord {
        StageRecord {
            header: BlockHeader {
                number: 1,
                hash: "a".repeat(32),
                previous_hash: "a".repeat(32),
                timestamp: "20261016:10:00:00".to_string(),
            },
            stage,
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn field_lookup_by_label() {
        let r = record(
            Stage::Shipping,
            &["SHIP005", "New York", "Shipment", "Air", "ABC Airlines", "In transit"],
        );
        assert_eq!(r.field("Carrier Name"), Some("ABC Airlines"));
        assert_eq!(r.field("Shipping Status"), Some("In transit"));
        assert_eq!(r.field("Press ID"), None);
    }

    #[test]
    fn missing_values_read_empty() {
        let r = record(Stage::Press, &["PRS001", "456 Industrial Avenue"]);
        assert_eq!(r.field("Press Capacity"), Some(""));
        assert_eq!(r.labeled_fields().count(), 6);
    }

    #[test]
    fn self_link_detection() {
        let mut r = record(Stage::Supply, &[]);
        assert!(r.is_self_linked());
        r.header.previous_hash = "b".repeat(32);
        assert!(!r.is_self_linked());
    }

    #[test]
    fn record_serialization_roundtrip() {
        let r = record(Stage::Welding, &["WLD002", "789 Industrial Avenue"]);
        let json = serde_json::to_string(&r).expect("serialize");
        let back: StageRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(r, back);
    }
}
