//! DTOs for the loan applications screen.

use serde::{Deserialize, Serialize};

use crate::domain::application::LoanApplication;
use crate::dto::{FacetOption, ROW_DATE_FORMAT};
use crate::listing::Paginated;

/// Query parameters accepted by the applications page.
#[derive(Debug, Default, Deserialize)]
pub struct ApplicationsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub lender: Option<String>,
    pub page: Option<usize>,
}

/// One table row with money and dates already formatted.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationRow {
    pub id: i32,
    pub reference: String,
    pub applicant: String,
    pub product: String,
    pub amount: String,
    pub lender: String,
    pub aggregator: Option<String>,
    pub status: String,
    pub status_label: String,
    pub submitted_at: String,
}

impl From<&LoanApplication> for ApplicationRow {
    fn from(application: &LoanApplication) -> Self {
        Self {
            id: application.id,
            reference: application.reference.clone(),
            applicant: application.applicant.clone(),
            product: application.product.clone(),
            amount: application.amount.to_string(),
            lender: application.lender.clone(),
            aggregator: application.aggregator.clone(),
            status: application.status.as_str().to_string(),
            status_label: application.status.label().to_string(),
            submitted_at: application.submitted_at.format(ROW_DATE_FORMAT).to_string(),
        }
    }
}

/// Everything the applications template needs.
#[derive(Debug, Serialize)]
pub struct ApplicationsPageData {
    pub applications: Paginated<ApplicationRow>,
    pub total: usize,
    pub search_query: String,
    pub status: String,
    pub lender: String,
    pub statuses: Vec<FacetOption>,
    pub lenders: Vec<String>,
    pub can_update_status: bool,
}
