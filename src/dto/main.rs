//! DTOs for the dashboard.

use serde::Serialize;

use crate::dto::applications::ApplicationRow;

/// Headline numbers shown in the dashboard cards.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_applications: usize,
    pub pending_review: usize,
    pub disbursed: usize,
    pub active_lenders: usize,
    pub month_label: String,
    pub month_volume: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardPageData {
    pub stats: DashboardStats,
    pub recent: Vec<ApplicationRow>,
}
