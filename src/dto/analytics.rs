//! DTOs for the analytics screen.

use serde::Serialize;

use crate::domain::analytics::VolumePoint;

/// One month on the volume chart.
#[derive(Debug, Clone, Serialize)]
pub struct VolumePointRow {
    pub month: String,
    pub disbursed: String,
    pub disbursed_paise: i64,
    pub applications: u32,
}

impl From<&VolumePoint> for VolumePointRow {
    fn from(point: &VolumePoint) -> Self {
        Self {
            month: point.month.clone(),
            disbursed: point.disbursed.to_string(),
            disbursed_paise: point.disbursed.paise(),
            applications: point.applications,
        }
    }
}

/// Share of applications currently sitting in one status.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSlice {
    pub status: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsPageData {
    pub points: Vec<VolumePointRow>,
    pub breakdown: Vec<StatusSlice>,
    pub total_disbursed: String,
    pub total_applications: u32,
    /// Largest monthly figure, for scaling the chart bars. At least 1 so
    /// templates can divide by it.
    pub max_paise: i64,
}
