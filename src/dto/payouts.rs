//! DTOs for the payouts screen.

use serde::{Deserialize, Serialize};

use crate::domain::payout::Payout;
use crate::dto::{FacetOption, ROW_DATE_FORMAT};
use crate::listing::Paginated;

/// Query parameters accepted by the payouts page.
#[derive(Debug, Default, Deserialize)]
pub struct PayoutsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub method: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PayoutRow {
    pub id: i32,
    pub partner: String,
    pub amount: String,
    pub method: String,
    pub reference: String,
    pub scheduled_for: String,
    pub status: String,
    pub status_label: String,
}

impl From<&Payout> for PayoutRow {
    fn from(payout: &Payout) -> Self {
        Self {
            id: payout.id,
            partner: payout.partner.clone(),
            amount: payout.amount.to_string(),
            method: payout.method.as_str().to_string(),
            reference: payout.reference.clone(),
            scheduled_for: payout.scheduled_for.format(ROW_DATE_FORMAT).to_string(),
            status: payout.status.as_str().to_string(),
            status_label: payout.status.label().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PayoutsPageData {
    pub payouts: Paginated<PayoutRow>,
    pub total: usize,
    pub search_query: String,
    pub status: String,
    pub method: String,
    pub statuses: Vec<FacetOption>,
    pub methods: Vec<FacetOption>,
}
