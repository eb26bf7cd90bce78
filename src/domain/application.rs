use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Money, TypeConstraintError};
use crate::listing::Filterable;

/// Pipeline stage of a loan application.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
    Disbursed,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Pending,
        ApplicationStatus::UnderReview,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
        ApplicationStatus::Disbursed,
    ];

    /// Stable token used in facet values and query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Disbursed => "disbursed",
        }
    }

    /// Human-readable label for templates.
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Disbursed => "Disbursed",
        }
    }
}

impl Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "under_review" => Ok(ApplicationStatus::UnderReview),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "disbursed" => Ok(ApplicationStatus::Disbursed),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown application status: {other}"
            ))),
        }
    }
}

/// A loan application routed through the platform.
///
/// Partner names are denormalized onto the record so list screens render
/// without joins against the partner collections.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoanApplication {
    pub id: i32,
    /// Reference shown to partners, e.g. `APL-2025-0012`.
    pub reference: String,
    pub applicant: String,
    pub product: String,
    pub amount: Money,
    pub lender_id: i32,
    pub lender: String,
    pub aggregator_id: Option<i32>,
    pub aggregator: Option<String>,
    pub status: ApplicationStatus,
    pub submitted_at: NaiveDate,
}

impl Filterable for LoanApplication {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.reference, &self.applicant, &self.product, &self.lender]
    }

    fn facet(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "lender" => Some(&self.lender),
            "product" => Some(&self.product),
            _ => None,
        }
    }
}
