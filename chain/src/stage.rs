//! # Stages
//!
//! The seven manufacturing and commerce phases a car passes through, in the
//! order they are chained. Everything that differs between stages (title,
//! field labels, units, caption text) is data in a [`StageDescriptor`], so
//! building and printing a record is one generic operation for all stages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One phase of the supply chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Supply,
    Press,
    Welding,
    Painting,
    Assembly,
    Shipping,
    Transaction,
}

impl Stage {
    /// All stages in chain order.
    pub const ALL: [Stage; 7] = [
        Stage::Supply,
        Stage::Press,
        Stage::Welding,
        Stage::Painting,
        Stage::Assembly,
        Stage::Shipping,
        Stage::Transaction,
    ];

    /// 1-based position of the stage in the chain.
    pub fn number(self) -> usize {
        match self {
            Stage::Supply => 1,
            Stage::Press => 2,
            Stage::Welding => 3,
            Stage::Painting => 4,
            Stage::Assembly => 5,
            Stage::Shipping => 6,
            Stage::Transaction => 7,
        }
    }

    /// Static presentation data for this stage.
    pub fn descriptor(self) -> &'static StageDescriptor {
        match self {
            Stage::Supply => &SUPPLY,
            Stage::Press => &PRESS,
            Stage::Welding => &WELDING,
            Stage::Painting => &PAINTING,
            Stage::Assembly => &ASSEMBLY,
            Stage::Shipping => &SHIPPING,
            Stage::Transaction => &TRANSACTION,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().title)
    }
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// A labeled field of a stage record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Label printed before the value.
    pub label: &'static str,
    /// Unit appended after the value when printed, e.g. `"tons"`.
    pub unit: Option<&'static str>,
}

/// One numbered caption line printed under a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caption {
    /// Bracketed topic, e.g. `"Quality Control"`.
    pub topic: &'static str,
    /// Explanation following the topic.
    pub text: &'static str,
}

/// Everything the reporter needs to know about a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDescriptor {
    /// Short title used in the stage heading.
    pub title: &'static str,
    /// Field layout, in dataset column order.
    pub fields: &'static [FieldSpec],
    /// Narrative captions, in print order.
    pub captions: &'static [Caption],
}

impl StageDescriptor {
    /// Width of the longest field label.
    pub fn label_width(&self) -> usize {
        self.fields.iter().map(|f| f.label.len()).max().unwrap_or(0)
    }

    /// Width of the longest bracketed caption topic.
    pub fn topic_width(&self) -> usize {
        self.captions
            .iter()
            .map(|c| c.topic.len() + 2)
            .max()
            .unwrap_or(0)
    }
}

const fn field(label: &'static str) -> FieldSpec {
    FieldSpec { label, unit: None }
}

const fn measured(label: &'static str, unit: &'static str) -> FieldSpec {
    FieldSpec {
        label,
        unit: Some(unit),
    }
}

const fn caption(topic: &'static str, text: &'static str) -> Caption {
    Caption { topic, text }
}

static SUPPLY: StageDescriptor = StageDescriptor {
    title: "Supply",
    fields: &[
        field("Supplier ID"),
        field("Supplier Name"),
        field("Supplier Item"),
        field("Location"),
        field("Branch"),
        field("Quantity"),
        field("Price"),
    ],
    captions: &[
        caption(
            "Supply Stage Overview",
            "Initial phase of car manufacturing, sourcing raw materials and components.",
        ),
        caption(
            "Key Activities",
            "Identifying reliable suppliers, negotiating contracts, monitoring inventory.",
        ),
        caption(
            "Materials and Components",
            "Metals, plastics, rubber, glass, electronics, and specialized parts.",
        ),
        caption(
            "Quality Control",
            "Ensuring received materials meet standards through inspections.",
        ),
        caption(
            "Supply Chain Management",
            "Efficient management practices to minimize delays and optimize production.",
        ),
        caption(
            "Supplier Relationships",
            "Building strong relationships for reliable and sustainable supply chains.",
        ),
    ],
};

static PRESS: StageDescriptor = StageDescriptor {
    title: "Press",
    fields: &[
        field("Press ID"),
        field("Press Location"),
        field("Press Details"),
        field("Press Type"),
        field("Press Manufacturer"),
        measured("Press Capacity", "tons"),
    ],
    captions: &[
        caption(
            "Press Stage Overview",
            "Shaping metal components using hydraulic or mechanical presses.",
        ),
        caption(
            "Press Types",
            "Hydraulic press, mechanical press, stamping press, forging press.",
        ),
        caption(
            "Press Capacity",
            "Indicates the maximum force exerted by the press, measured in tons.",
        ),
        caption(
            "Press Manufacturer",
            "Company responsible for designing, manufacturing, and supplying the press.",
        ),
        caption(
            "Quality Assurance",
            "Ensuring precise and consistent shaping of metal parts for assembly.",
        ),
        caption(
            "Efficiency and Productivity",
            "Optimization of press operations for higher output and reduced cycle times.",
        ),
    ],
};

static WELDING: StageDescriptor = StageDescriptor {
    title: "Welding",
    fields: &[
        field("Welding ID"),
        field("Welding Location"),
        field("Welding Details"),
        field("Welding Type"),
        field("Welding Material"),
        measured("Welding Temperature", "Celsius"),
    ],
    captions: &[
        caption(
            "Welding Stage Overview",
            "Joining metal components using various welding techniques and materials.",
        ),
        caption(
            "Welding Types",
            "MIG (Metal Inert Gas), TIG (Tungsten Inert Gas), Arc welding, Spot welding.",
        ),
        caption("Welding Materials", "Metals, alloys, plastics, composites."),
        caption(
            "Welding Temperature",
            "Temperature at which the welding process occurs, measured in Celsius.",
        ),
        caption(
            "Quality Assurance",
            "Ensuring structural integrity and proper bonding of welded components.",
        ),
        caption(
            "Efficiency and Precision",
            "Optimization of welding parameters for consistent and high-quality welds.",
        ),
    ],
};

static PAINTING: StageDescriptor = StageDescriptor {
    title: "Paint",
    fields: &[
        field("Painting ID"),
        field("Painting Location"),
        field("Painting Details"),
        field("Painting Color"),
        field("Painting Type"),
        measured("Painting Thickness", "mm"),
    ],
    captions: &[
        caption(
            "Painting Stage Overview",
            "Applying protective and decorative coatings to car bodies.",
        ),
        caption(
            "Painting Process",
            "Surface preparation, primer application, base coat, clear coat.",
        ),
        caption(
            "Painting Color",
            "Choice of colors for aesthetics and brand identity.",
        ),
        caption("Painting Type", "Solid, metallic, pearlescent, matte, gloss."),
        caption(
            "Painting Thickness",
            "Thickness of the paint layer applied, measured in millimeters.",
        ),
        caption(
            "Quality Assurance",
            "Ensuring uniformity, adhesion, and durability of the paint finish.",
        ),
        caption(
            "Environmental Considerations",
            "Compliance with environmental regulations regarding paint application and waste disposal.",
        ),
    ],
};

static ASSEMBLY: StageDescriptor = StageDescriptor {
    title: "Assembly",
    fields: &[
        field("Assembly ID"),
        field("Assembly Location"),
        field("Assembly Details"),
        field("Assembly Type"),
        field("Number of Parts"),
        measured("Assembly Weight", "kg"),
    ],
    captions: &[
        caption(
            "Assembly Stage Overview",
            "Combining various components and subsystems to form complete vehicles.",
        ),
        caption(
            "Assembly Process",
            "Sequential assembly line process, with each station performing specific tasks.",
        ),
        caption(
            "Assembly Type",
            "Body assembly, chassis assembly, powertrain assembly, final assembly.",
        ),
        caption(
            "Number of Parts",
            "Total number of components required to assemble a vehicle.",
        ),
        caption(
            "Assembly Weight",
            "Total weight of the assembled vehicle, including all components.",
        ),
        caption(
            "Quality Assurance",
            "Ensuring fit, finish, and functionality of assembled vehicles.",
        ),
        caption(
            "Testing",
            "Conducting final inspections and functional tests before vehicles are shipped.",
        ),
    ],
};

static SHIPPING: StageDescriptor = StageDescriptor {
    title: "Shipping",
    fields: &[
        field("Shipping ID"),
        field("Shipping Destination"),
        field("Shipping Details"),
        field("Shipping Type"),
        field("Carrier Name"),
        field("Shipping Status"),
    ],
    captions: &[
        caption(
            "Shipping Stage Overview",
            "Transporting assembled vehicles from manufacturing plants to distribution centers or dealerships.",
        ),
        caption(
            "Shipping Process",
            "Coordinating logistics, loading vehicles onto carriers, and delivering them to their destinations.",
        ),
        caption(
            "Shipping Type",
            "Different modes of transportation such as road, rail, sea, or air shipping.",
        ),
        caption(
            "Carrier Name",
            "Name of the shipping company or carrier responsible for transporting vehicles.",
        ),
        caption(
            "Shipping Status",
            "Tracking the status of shipments, including in transit, delivered, or awaiting delivery.",
        ),
    ],
};

// Labels follow the dataset column order (sender and receiver before the
// currency and amount).
static TRANSACTION: StageDescriptor = StageDescriptor {
    title: "Transaction",
    fields: &[
        field("Transaction ID"),
        field("Transaction Type"),
        field("Sender"),
        field("Receiver"),
        field("Currency"),
        field("Transaction Amount"),
        field("Transaction Status"),
    ],
    captions: &[
        caption(
            "Transaction Stage Overview",
            "Finalizing the purchase transaction for vehicles between entities involved, such as manufacturers, dealerships, or customers.",
        ),
        caption(
            "Transaction Type",
            "Types of transactions include purchases, sales, payments, or transfers of ownership.",
        ),
        caption(
            "Transaction Amount",
            "Monetary value involved in the transaction, typically denoted in the specified currency.",
        ),
        caption(
            "Sender and Receiver",
            "Identifying parties involved in the transaction, indicating the entity sending or receiving the payment or vehicle.",
        ),
        caption(
            "Currency",
            "The currency used for the transaction, such as USD (US Dollar), EUR (Euro), or any other applicable currency.",
        ),
        caption(
            "Transaction Status",
            "Indicating the status of the transaction, whether it's completed, pending, or failed.",
        ),
    ],
};
