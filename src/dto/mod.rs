//! View-facing data structures.
//!
//! Services assemble these from domain records so templates and the JSON
//! API never format money, dates or status labels themselves.

use serde::Serialize;

pub mod analytics;
pub mod api;
pub mod applications;
pub mod commissions;
pub mod main;
pub mod partners;
pub mod payouts;
pub mod settings;

/// Date format used in list rows.
pub const ROW_DATE_FORMAT: &str = "%d %b %Y";

/// One `<option>` in a facet dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
}

impl FacetOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}
