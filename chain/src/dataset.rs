//! # Dataset
//!
//! The fixed input table: one row of text values per stage, in chain order.
//! Values are kept exactly as written. Quantities, prices and temperatures
//! are text too; nothing here parses or validates them.

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

/// One stage's worth of input values, in the stage's field order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Stage this row feeds.
    pub stage: Stage,
    /// Raw values, positionally matching the stage's field labels.
    pub values: Vec<String>,
}

impl DatasetRow {
    /// Build a row from string literals.
    pub fn new<I, S>(stage: Stage, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stage,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered set of rows handed to the chain builder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Wrap an arbitrary list of rows. Order is checked at build time.
    pub fn new(rows: Vec<DatasetRow>) -> Self {
        Self { rows }
    }

    /// The car manufacturing dataset shipped with the demo.
    ///
    /// The press row carries no capacity value, so its capacity prints
    /// empty.
    pub fn builtin() -> Self {
        Self::new(vec![
            DatasetRow::new(
                Stage::Supply,
                [
                    "SUP001",
                    "ABC Suppliers",
                    "Product X",
                    "123 Main Street",
                    "Branch A",
                    "100",
                    "50.75",
                ],
            ),
            DatasetRow::new(
                Stage::Press,
                [
                    "PRS001",
                    "456 Industrial Avenue",
                    "Heavy-duty press machine",
                    "Hydraulic",
                    "XYZ Machinery Inc.",
                ],
            ),
            DatasetRow::new(
                Stage::Welding,
                [
                    "WLD002",
                    "789 Industrial Avenue",
                    "Robotic welding station",
                    "MIG",
                    "Steel",
                    "2200.0",
                ],
            ),
            DatasetRow::new(
                Stage::Painting,
                [
                    "PNT003",
                    "123 Main Street",
                    "Automated painting booth",
                    "Red",
                    "Acrylic",
                    "0.02",
                ],
            ),
            DatasetRow::new(
                Stage::Assembly,
                [
                    "ASM004",
                    "456 Elm Street",
                    "Automated assembly line",
                    "Car",
                    "150",
                    "1200.5",
                ],
            ),
            DatasetRow::new(
                Stage::Shipping,
                [
                    "SHIP005",
                    "New York",
                    "Shipment of car parts",
                    "Air",
                    "ABC Airlines",
                    "In transit",
                ],
            ),
            DatasetRow::new(
                Stage::Transaction,
                [
                    "TRANS007",
                    "Purchase",
                    "Company A",
                    "Company B",
                    "USD",
                    "1500.75",
                    "Completed",
                ],
            ),
        ])
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STAGE_COUNT;

    #[test]
    fn builtin_has_one_row_per_stage_in_order() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.len(), STAGE_COUNT);
        for (row, stage) in dataset.rows().iter().zip(Stage::ALL) {
            assert_eq!(row.stage, stage);
        }
    }

    #[test]
    fn builtin_rows_fit_their_field_layout() {
        for row in Dataset::builtin().rows() {
            assert!(row.values.len() <= row.stage.descriptor().fields.len());
        }
    }

    #[test]
    fn values_are_stored_verbatim() {
        let dataset = Dataset::builtin();
        let welding = &dataset.rows()[2];
        assert_eq!(welding.values[5], "2200.0");
        let transaction = &dataset.rows()[6];
        assert_eq!(transaction.values[5], "1500.75");
    }
}
