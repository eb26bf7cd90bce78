use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{Email, Phone, TrustedText, TypeConstraintError};

/// Access level of a dashboard account.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    SuperAdmin,
    Lender,
    Aggregator,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::SuperAdmin, UserRole::Lender, UserRole::Aggregator];

    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "super_admin",
            UserRole::Lender => "lender",
            UserRole::Aggregator => "aggregator",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Lender => "Lender",
            UserRole::Aggregator => "Aggregator",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(UserRole::SuperAdmin),
            "lender" => Ok(UserRole::Lender),
            "aggregator" => Ok(UserRole::Aggregator),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown role: {other}"
            ))),
        }
    }
}

/// A dashboard account.
///
/// `partner_id` links lender and aggregator accounts to the partner whose
/// data they may see; it is `None` for super admins.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DashboardUser {
    pub id: i32,
    /// Stable public identifier carried in session tokens.
    pub uid: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub partner_id: Option<i32>,
    pub joined_at: NaiveDate,
}

/// Payload for registering an account. Construction normalizes the email
/// and display name.
#[derive(Clone, Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub partner_id: Option<i32>,
}

impl NewUser {
    pub fn new(
        name: String,
        email: String,
        role: UserRole,
        partner_id: Option<i32>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: TrustedText::new(&name)?.into_inner(),
            email: Email::new(email)?.into_inner(),
            role,
            partner_id,
        })
    }
}

/// Profile fields an account holder may change about themselves.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProfile {
    pub name: String,
    pub phone: Option<String>,
}

impl UpdateProfile {
    pub fn new(name: String, phone: Option<String>) -> Result<Self, TypeConstraintError> {
        let phone = match phone {
            Some(raw) if !raw.trim().is_empty() => Some(Phone::new(&raw)?.into_inner()),
            _ => None,
        };
        Ok(Self {
            name: TrustedText::new(&name)?.into_inner(),
            phone,
        })
    }
}
