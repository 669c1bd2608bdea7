//! # Console Reporter
//!
//! Read-only rendering of the dataset and the chain. Every writer is
//! generic over [`std::io::Write`] so the console can target stdout and tests
//! can target a `Vec<u8>`.
//!
//! Output layout per record:
//!
//! ```text
//! ===== Stage 1 : Supply =====
//!
//! -----------------------------------------------------------------  (green)
//! |     Block Number     |   Current Block Hash   |  ...          |
//! -----------------------------------------------------------------
//! |          1           |  <hash>  |  <previous hash>  |  <time> |
//! -----------------------------------------------------------------
//!
//! Supplier ID    : SUP001
//! ...
//!
//! 1. [Supply Stage Overview]    : ...                                (blue)
//! ```

use std::io::{self, Write};

use crate::block::StageRecord;
use crate::chain::SupplyChain;
use crate::dataset::Dataset;

// ---------------------------------------------------------------------------
// ANSI palette
// ---------------------------------------------------------------------------

const GREEN: &str = "\x1b[1;32m";
const BLUE: &str = "\x1b[1;34m";
const RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Escape sequences wrapped around each section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Hash table.
    pub table: &'static str,
    /// Stage captions.
    pub caption: &'static str,
    /// Dataset rows.
    pub dataset: &'static str,
    /// Back to the terminal default.
    pub reset: &'static str,
}

impl Palette {
    /// Bold green, blue and red, as most terminals render them.
    pub const fn ansi() -> Self {
        Self {
            table: GREEN,
            caption: BLUE,
            dataset: RED,
            reset: RESET,
        }
    }

    /// No escape sequences at all.
    pub const fn plain() -> Self {
        Self {
            table: "",
            caption: "",
            dataset: "",
            reset: "",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::ansi()
    }
}

// ---------------------------------------------------------------------------
// Header table
// ---------------------------------------------------------------------------

/// Column titles and inner widths of the header table.
const COLUMNS: [(&str, usize); 4] = [
    ("Block Number", 22),
    ("Current Block Hash", 36),
    ("Previous Block Hash", 37),
    ("Timestamp", 19),
];

fn table_border() -> String {
    let inner: usize = COLUMNS.iter().map(|(_, w)| w).sum();
    "-".repeat(inner + COLUMNS.len() + 1)
}

fn table_row(cells: [&str; 4]) -> String {
    let mut line = String::from("|");
    for (cell, (_, width)) in cells.iter().zip(COLUMNS) {
        line.push_str(&format!("{cell:^width$}|"));
    }
    line
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Print the raw dataset, one row per line, values separated by `" | "`.
pub fn write_dataset<W: Write>(w: &mut W, dataset: &Dataset, palette: Palette) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "===== Dataset =====")?;
    writeln!(w)?;
    write!(w, "{}", palette.dataset)?;
    for row in dataset.rows() {
        for value in &row.values {
            write!(w, "{value} | ")?;
        }
        writeln!(w)?;
    }
    writeln!(w)?;
    writeln!(w)?;
    write!(w, "{}", palette.reset)?;
    Ok(())
}

/// Print one record: stage heading, header table, fields and captions.
pub fn write_record<W: Write>(w: &mut W, record: &StageRecord, palette: Palette) -> io::Result<()> {
    let descriptor = record.stage.descriptor();
    let header = &record.header;

    writeln!(w)?;
    writeln!(
        w,
        "===== Stage {} : {} =====",
        record.stage.number(),
        descriptor.title
    )?;
    writeln!(w)?;

    let border = table_border();
    let number = header.number.to_string();
    write!(w, "{}", palette.table)?;
    writeln!(w, "{border}")?;
    writeln!(w, "{}", table_row(COLUMNS.map(|(title, _)| title)))?;
    writeln!(w, "{border}")?;
    writeln!(
        w,
        "{}",
        table_row([
            number.as_str(),
            header.hash.as_str(),
            header.previous_hash.as_str(),
            header.timestamp.as_str(),
        ])
    )?;
    writeln!(w, "{border}")?;
    writeln!(w)?;
    write!(w, "{}", palette.reset)?;

    let label_width = descriptor.label_width() + 2;
    for (spec, value) in record.labeled_fields() {
        match spec.unit {
            Some(unit) => writeln!(w, "{:<label_width$}: {value} {unit}", spec.label)?,
            None => writeln!(w, "{:<label_width$}: {value}", spec.label)?,
        }
    }
    writeln!(w)?;

    let topic_width = descriptor.topic_width() + 1;
    write!(w, "{}", palette.caption)?;
    for (i, caption) in descriptor.captions.iter().enumerate() {
        let topic = format!("[{}]", caption.topic);
        writeln!(w, "{}. {topic:<topic_width$}: {}", i + 1, caption.text)?;
    }
    writeln!(w)?;
    writeln!(w)?;
    write!(w, "{}", palette.reset)?;
    Ok(())
}

/// Print every record of the chain in stage order.
pub fn write_chain<W: Write>(w: &mut W, chain: &SupplyChain, palette: Palette) -> io::Result<()> {
    for record in chain {
        write_record(w, record, palette)?;
    }
    Ok(())
}
