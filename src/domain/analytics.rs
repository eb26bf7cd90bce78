use serde::{Deserialize, Serialize};

use crate::domain::types::Money;

/// One month of disbursal volume attributed to a single partner.
///
/// Rows carry both partner links so the same series can be sliced for a
/// lender, an aggregator, or the whole platform.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MonthlyVolume {
    pub lender_id: Option<i32>,
    pub aggregator_id: Option<i32>,
    /// Calendar month in `YYYY-MM` form.
    pub month: String,
    pub disbursed: Money,
    pub applications: u32,
}

/// Aggregated point rendered on the volume chart.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VolumePoint {
    pub month: String,
    pub disbursed: Money,
    pub applications: u32,
}
