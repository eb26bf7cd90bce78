//! Business logic between HTTP handlers and the repository.
//!
//! Services check roles, derive the caller's partner scope, validate
//! payloads and shape repository rows into DTOs. Handlers only translate
//! the outcome into responses.

use crate::domain::types::{AggregatorId, LenderId};
use crate::models::auth::AuthenticatedUser;
use crate::repository::PartnerScope;
use crate::{AGGREGATOR_ROLE, LENDER_ROLE, SUPER_ADMIN_ROLE};

pub mod analytics;
pub mod api;
pub mod applications;
pub mod auth;
pub mod commissions;
pub mod errors;
pub mod main;
pub mod partners;
pub mod payouts;
pub mod settings;

pub use errors::{ServiceError, ServiceResult};

/// Derives the data scope for the signed-in user.
///
/// Super admins see everything; lender and aggregator accounts are confined
/// to their own partner. Accounts without a partner assignment cannot see
/// any data yet and are treated as unauthorized.
pub fn scope_for(user: &AuthenticatedUser) -> ServiceResult<PartnerScope> {
    match user.role.as_str() {
        SUPER_ADMIN_ROLE => Ok(PartnerScope::All),
        LENDER_ROLE => {
            let partner_id = user.partner_id.ok_or(ServiceError::Unauthorized)?;
            Ok(PartnerScope::Lender(LenderId::new(partner_id)?))
        }
        AGGREGATOR_ROLE => {
            let partner_id = user.partner_id.ok_or(ServiceError::Unauthorized)?;
            Ok(PartnerScope::Aggregator(AggregatorId::new(partner_id)?))
        }
        _ => Err(ServiceError::Unauthorized),
    }
}
