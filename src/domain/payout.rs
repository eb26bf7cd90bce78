use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Money, TypeConstraintError};
use crate::listing::Filterable;

/// Processing state of a scheduled payout.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    Scheduled,
    Processing,
    Completed,
}

impl PayoutStatus {
    pub const ALL: [PayoutStatus; 3] = [
        PayoutStatus::Scheduled,
        PayoutStatus::Processing,
        PayoutStatus::Completed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PayoutStatus::Scheduled => "scheduled",
            PayoutStatus::Processing => "processing",
            PayoutStatus::Completed => "completed",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PayoutStatus::Scheduled => "Scheduled",
            PayoutStatus::Processing => "Processing",
            PayoutStatus::Completed => "Completed",
        }
    }
}

impl Display for PayoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PayoutStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(PayoutStatus::Scheduled),
            "processing" => Ok(PayoutStatus::Processing),
            "completed" => Ok(PayoutStatus::Completed),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown payout status: {other}"
            ))),
        }
    }
}

/// Rail used to move the money.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutMethod {
    Neft,
    Imps,
    Upi,
}

impl PayoutMethod {
    pub const ALL: [PayoutMethod; 3] = [PayoutMethod::Neft, PayoutMethod::Imps, PayoutMethod::Upi];

    pub const fn as_str(self) -> &'static str {
        match self {
            PayoutMethod::Neft => "NEFT",
            PayoutMethod::Imps => "IMPS",
            PayoutMethod::Upi => "UPI",
        }
    }
}

impl Display for PayoutMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PayoutMethod {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEFT" => Ok(PayoutMethod::Neft),
            "IMPS" => Ok(PayoutMethod::Imps),
            "UPI" => Ok(PayoutMethod::Upi),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown payout method: {other}"
            ))),
        }
    }
}

/// A scheduled or completed transfer of settled commissions to a partner.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Payout {
    pub id: i32,
    pub partner_id: i32,
    pub partner: String,
    pub amount: Money,
    pub method: PayoutMethod,
    /// Bank transaction reference, e.g. `UTR520861234567`.
    pub reference: String,
    pub scheduled_for: NaiveDate,
    pub status: PayoutStatus,
}

impl Filterable for Payout {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.partner, &self.reference]
    }

    fn facet(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "method" => Some(self.method.as_str()),
            _ => None,
        }
    }
}
