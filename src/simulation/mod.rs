//! Property computation over live bodies

pub mod aggregation;
pub mod report;
pub mod skirmish;

pub use aggregation::{
    breakdown, part_efficiency, properties, properties_with, property, property_with,
    PartContribution, PropertyBreakdown,
};
pub use report::BodyReport;
