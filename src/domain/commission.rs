use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::{Money, TypeConstraintError};
use crate::listing::Filterable;

/// Settlement state of a commission entry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommissionStatus {
    Pending,
    Approved,
    Paid,
}

impl CommissionStatus {
    pub const ALL: [CommissionStatus; 3] = [
        CommissionStatus::Pending,
        CommissionStatus::Approved,
        CommissionStatus::Paid,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CommissionStatus::Pending => "pending",
            CommissionStatus::Approved => "approved",
            CommissionStatus::Paid => "paid",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CommissionStatus::Pending => "Pending",
            CommissionStatus::Approved => "Approved",
            CommissionStatus::Paid => "Paid",
        }
    }
}

impl Display for CommissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CommissionStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CommissionStatus::Pending),
            "approved" => Ok(CommissionStatus::Approved),
            "paid" => Ok(CommissionStatus::Paid),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown commission status: {other}"
            ))),
        }
    }
}

/// One partner's commission for one settlement period.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommissionEntry {
    pub id: i32,
    pub partner_id: i32,
    pub partner: String,
    /// Settlement period in `YYYY-MM` form.
    pub period: String,
    /// Loan volume the commission was computed from.
    pub loan_volume: Money,
    /// Commission rate in basis points.
    pub rate_bps: i32,
    pub amount: Money,
    pub status: CommissionStatus,
}

impl Filterable for CommissionEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.partner, &self.period]
    }

    fn facet(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "period" => Some(&self.period),
            _ => None,
        }
    }
}
