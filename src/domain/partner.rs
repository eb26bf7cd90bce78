use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{Email, Money, Phone, TrustedText, TypeConstraintError};
use crate::listing::Filterable;

/// Lifecycle state shared by lenders and aggregators.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PartnerStatus {
    Active,
    Inactive,
    Pending,
}

impl PartnerStatus {
    pub const ALL: [PartnerStatus; 3] = [
        PartnerStatus::Active,
        PartnerStatus::Inactive,
        PartnerStatus::Pending,
    ];

    /// Stable token used in facet values and query strings.
    pub const fn as_str(self) -> &'static str {
        match self {
            PartnerStatus::Active => "active",
            PartnerStatus::Inactive => "inactive",
            PartnerStatus::Pending => "pending",
        }
    }

    /// Human-readable label for templates.
    pub const fn label(self) -> &'static str {
        match self {
            PartnerStatus::Active => "Active",
            PartnerStatus::Inactive => "Inactive",
            PartnerStatus::Pending => "Pending",
        }
    }
}

impl Display for PartnerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PartnerStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(PartnerStatus::Active),
            "inactive" => Ok(PartnerStatus::Inactive),
            "pending" => Ok(PartnerStatus::Pending),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown partner status: {other}"
            ))),
        }
    }
}

/// A lending partner visible on the lenders screen.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Lender {
    pub id: i32,
    pub name: String,
    /// Short reference code, e.g. `LND-1042`.
    pub code: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub city: String,
    /// Loan products this lender offers.
    pub products: Vec<String>,
    /// Commission rate in basis points.
    pub commission_bps: i32,
    pub status: PartnerStatus,
    pub monthly_volume: Money,
    /// Aggregator that sourced this lender, when onboarded through one.
    pub aggregator_id: Option<i32>,
    pub onboarded_at: NaiveDate,
    pub notes: Option<String>,
}

impl Filterable for Lender {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.code, &self.contact_email, &self.city]
    }

    fn facet(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "city" => Some(&self.city),
            _ => None,
        }
    }
}

/// Payload for onboarding a lender. Construction normalizes contact details
/// and sanitizes the free-text notes, so a value of this type is safe to
/// persist as-is.
#[derive(Clone, Debug, Deserialize)]
pub struct NewLender {
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub city: String,
    pub products: Vec<String>,
    pub commission_bps: i32,
    pub aggregator_id: Option<i32>,
    pub notes: Option<String>,
}

impl NewLender {
    /// Commission rates are expressed in basis points; anything above 100%
    /// is a data-entry error.
    const MAX_COMMISSION_BPS: i32 = 10_000;

    pub fn new(
        name: String,
        contact_email: String,
        contact_phone: String,
        city: String,
        products: Vec<String>,
        commission_bps: i32,
        aggregator_id: Option<i32>,
        notes: Option<String>,
    ) -> Result<Self, TypeConstraintError> {
        if !(0..=Self::MAX_COMMISSION_BPS).contains(&commission_bps) {
            return Err(TypeConstraintError::InvalidValue(format!(
                "commission rate out of range: {commission_bps}"
            )));
        }
        let name = TrustedText::new(&name)?;
        let email = Email::new(contact_email)?;
        let phone = Phone::new(&contact_phone)?;
        let city = TrustedText::new(&city)?;
        let notes = match notes {
            Some(raw) if !raw.trim().is_empty() => Some(TrustedText::new(&raw)?.into_inner()),
            _ => None,
        };
        let products = products
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        Ok(Self {
            name: name.into_inner(),
            contact_email: email.into_inner(),
            contact_phone: phone.into_inner(),
            city: city.into_inner(),
            products,
            commission_bps,
            aggregator_id,
            notes,
        })
    }
}

/// An aggregator partner routing applications to multiple lenders.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Aggregator {
    pub id: i32,
    pub name: String,
    /// Short reference code, e.g. `AGG-2007`.
    pub code: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub city: String,
    /// Number of lenders currently sourced through this aggregator.
    pub lender_count: u32,
    pub monthly_volume: Money,
    pub status: PartnerStatus,
    pub onboarded_at: NaiveDate,
}

impl Filterable for Aggregator {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.code, &self.contact_email, &self.city]
    }

    fn facet(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status.as_str()),
            "city" => Some(&self.city),
            _ => None,
        }
    }
}
