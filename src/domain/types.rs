//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, normalized
//! email, region-valid phone numbers, sanitized free text) so that once a
//! value reaches the domain layer it can be treated as trusted.

use std::fmt::{Display, Formatter};

use phonenumber::Mode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not meet the expected format.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(LenderId, "Unique identifier for a lending partner.");
id_newtype!(AggregatorId, "Unique identifier for an aggregator partner.");
id_newtype!(ApplicationId, "Unique identifier for a loan application.");

/// Normalized, format-checked email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// Trims and lowercases the input, rejecting anything that does not look
    /// like an email address.
    pub fn new(raw: impl Into<String>) -> Result<Self, TypeConstraintError> {
        let normalized = raw.into().trim().to_lowercase();
        if normalized.validate_email() {
            Ok(Self(normalized))
        } else {
            Err(TypeConstraintError::InvalidEmail)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Contact number parsed and stored in E.164 form. Numbers are interpreted
/// against the IN region when no country code is given.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, TypeConstraintError> {
        let parsed = phonenumber::parse(Some(phonenumber::country::IN), raw)
            .map_err(|_| TypeConstraintError::InvalidPhone)?;
        if !phonenumber::is_valid(&parsed) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(parsed.format().mode(Mode::E164).to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Phone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free text stripped of markup before it is stored or rendered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrustedText(String);

impl TrustedText {
    pub fn new(raw: &str) -> Result<Self, TypeConstraintError> {
        let cleaned = ammonia::clean(raw);
        let trimmed = cleaned.trim();
        if trimmed.is_empty() {
            Err(TypeConstraintError::EmptyString)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for TrustedText {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monetary amount in paise (hundredths of a rupee).
///
/// Displays with Indian digit grouping: `₹12,34,567` for whole-rupee values,
/// `₹12,34,567.50` when paise are present.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct Money(i64);

impl Money {
    #[must_use]
    pub const fn from_paise(paise: i64) -> Self {
        Self(paise)
    }

    #[must_use]
    pub const fn from_rupees(rupees: i64) -> Self {
        Self(rupees * 100)
    }

    #[must_use]
    pub const fn paise(self) -> i64 {
        self.0
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let rupees = group_indian(abs / 100);
        let paise = abs % 100;
        if paise == 0 {
            write!(f, "{sign}₹{rupees}")
        } else {
            write!(f, "{sign}₹{rupees}.{paise:02}")
        }
    }
}

/// Groups digits the Indian way: the last three stay together, everything
/// before them splits into pairs (`1234567` -> `12,34,567`).
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut parts = Vec::new();
    let mut end = head.len();
    while end > 2 {
        parts.push(&head[end - 2..end]);
        end -= 2;
    }
    parts.push(&head[..end]);
    parts.reverse();

    format!("{},{}", parts.join(","), tail)
}
