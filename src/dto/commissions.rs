//! DTOs for the commissions screen.

use serde::{Deserialize, Serialize};

use crate::domain::commission::CommissionEntry;
use crate::dto::FacetOption;
use crate::listing::Paginated;

/// Query parameters accepted by the commissions page.
#[derive(Debug, Default, Deserialize)]
pub struct CommissionsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub period: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommissionRow {
    pub id: i32,
    pub partner: String,
    pub period: String,
    pub loan_volume: String,
    pub rate: String,
    pub amount: String,
    pub status: String,
    pub status_label: String,
}

impl From<&CommissionEntry> for CommissionRow {
    fn from(entry: &CommissionEntry) -> Self {
        Self {
            id: entry.id,
            partner: entry.partner.clone(),
            period: entry.period.clone(),
            loan_volume: entry.loan_volume.to_string(),
            rate: format!("{}.{:02}%", entry.rate_bps / 100, entry.rate_bps % 100),
            amount: entry.amount.to_string(),
            status: entry.status.as_str().to_string(),
            status_label: entry.status.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommissionsPageData {
    pub entries: Paginated<CommissionRow>,
    pub total: usize,
    pub search_query: String,
    pub status: String,
    pub period: String,
    pub statuses: Vec<FacetOption>,
    pub periods: Vec<String>,
}
