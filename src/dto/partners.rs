//! DTOs for the lender and aggregator directories.

use serde::{Deserialize, Serialize};

use crate::domain::partner::{Aggregator, Lender};
use crate::dto::{FacetOption, ROW_DATE_FORMAT};
use crate::listing::Paginated;

/// Query parameters accepted by both partner directories.
#[derive(Debug, Default, Deserialize)]
pub struct PartnersQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LenderRow {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub city: String,
    pub products: String,
    pub commission_rate: String,
    pub status: String,
    pub status_label: String,
    pub monthly_volume: String,
    pub aggregator: Option<String>,
    pub onboarded_at: String,
}

impl LenderRow {
    /// `aggregator` is resolved by the caller since rows only carry the id.
    pub fn new(lender: &Lender, aggregator: Option<String>) -> Self {
        Self {
            id: lender.id,
            name: lender.name.clone(),
            code: lender.code.clone(),
            contact_email: lender.contact_email.clone(),
            contact_phone: lender.contact_phone.clone(),
            city: lender.city.clone(),
            products: lender.products.join(", "),
            commission_rate: format_bps(lender.commission_bps),
            status: lender.status.as_str().to_string(),
            status_label: lender.status.label().to_string(),
            monthly_volume: lender.monthly_volume.to_string(),
            aggregator,
            onboarded_at: lender.onboarded_at.format(ROW_DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregatorRow {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub city: String,
    pub lender_count: u32,
    pub monthly_volume: String,
    pub status: String,
    pub status_label: String,
    pub onboarded_at: String,
}

impl From<&Aggregator> for AggregatorRow {
    fn from(aggregator: &Aggregator) -> Self {
        Self {
            id: aggregator.id,
            name: aggregator.name.clone(),
            code: aggregator.code.clone(),
            contact_email: aggregator.contact_email.clone(),
            contact_phone: aggregator.contact_phone.clone(),
            city: aggregator.city.clone(),
            lender_count: aggregator.lender_count,
            monthly_volume: aggregator.monthly_volume.to_string(),
            status: aggregator.status.as_str().to_string(),
            status_label: aggregator.status.label().to_string(),
            onboarded_at: aggregator.onboarded_at.format(ROW_DATE_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LendersPageData {
    pub lenders: Paginated<LenderRow>,
    pub total: usize,
    pub search_query: String,
    pub status: String,
    pub statuses: Vec<FacetOption>,
    pub aggregators: Vec<FacetOption>,
    pub can_add: bool,
}

#[derive(Debug, Serialize)]
pub struct AggregatorsPageData {
    pub aggregators: Paginated<AggregatorRow>,
    pub total: usize,
    pub search_query: String,
    pub status: String,
    pub statuses: Vec<FacetOption>,
}

/// Renders basis points as a percentage, `250` becomes `2.50%`.
fn format_bps(bps: i32) -> String {
    format!("{}.{:02}%", bps / 100, bps % 100)
}

#[cfg(test)]
mod tests {
    use super::format_bps;

    #[test]
    fn test_format_bps() {
        assert_eq!(format_bps(250), "2.50%");
        assert_eq!(format_bps(305), "3.05%");
        assert_eq!(format_bps(10_000), "100.00%");
        assert_eq!(format_bps(0), "0.00%");
    }
}
