//! Storage traits the service layer depends on.
//!
//! Services talk to readers and writers, never to a concrete store, so the
//! in-memory backend can be swapped for a database one without touching
//! them. [`ListQuery`] carries the shared list parameters: the partner scope
//! a session is confined to, the user's filter, and the requested page.

use crate::domain::analytics::{MonthlyVolume, VolumePoint};
use crate::domain::application::{ApplicationStatus, LoanApplication};
use crate::domain::commission::CommissionEntry;
use crate::domain::partner::{Aggregator, Lender, NewLender};
use crate::domain::payout::Payout;
use crate::domain::types::{AggregatorId, ApplicationId, Email, LenderId};
use crate::domain::user::{DashboardUser, NewUser, UpdateProfile};
use crate::listing::{ListFilter, Pagination};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(feature = "test-mocks")]
pub mod mock;
mod seed;

/// The slice of partner data a session is allowed to see.
///
/// Scope is derived from the authenticated user's role and is applied before
/// any user-chosen filter, so no filter combination can widen visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PartnerScope {
    /// Super admins see everything.
    #[default]
    All,
    /// Lender accounts see records tied to their own lender.
    Lender(LenderId),
    /// Aggregator accounts see records tied to lenders they sourced.
    Aggregator(AggregatorId),
}

impl PartnerScope {
    pub fn covers_application(&self, application: &LoanApplication) -> bool {
        match self {
            PartnerScope::All => true,
            PartnerScope::Lender(id) => application.lender_id == id.get(),
            PartnerScope::Aggregator(id) => application.aggregator_id == Some(id.get()),
        }
    }

    pub fn covers_lender(&self, lender: &Lender) -> bool {
        match self {
            PartnerScope::All => true,
            PartnerScope::Lender(id) => lender.id == id.get(),
            PartnerScope::Aggregator(id) => lender.aggregator_id == Some(id.get()),
        }
    }

    /// Commission and payout rows key on the receiving lender.
    pub fn covers_settlement(&self, partner_id: i32) -> bool {
        match self {
            PartnerScope::All => true,
            PartnerScope::Lender(id) => partner_id == id.get(),
            PartnerScope::Aggregator(_) => false,
        }
    }

    /// Volume rows are attributed to exactly one lender, so the platform-wide
    /// sum never counts a loan twice.
    pub fn covers_volume(&self, row: &MonthlyVolume) -> bool {
        match self {
            PartnerScope::All => true,
            PartnerScope::Lender(id) => row.lender_id == Some(id.get()),
            PartnerScope::Aggregator(id) => row.aggregator_id == Some(id.get()),
        }
    }
}

/// Parameters shared by every list operation.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub scope: PartnerScope,
    pub filter: ListFilter,
    pub pagination: Option<Pagination>,
}

impl ListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn scope(mut self, scope: PartnerScope) -> Self {
        self.scope = scope;
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: ListFilter) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination::new(page, per_page));
        self
    }
}

pub trait ApplicationReader {
    fn get_application_by_id(&self, id: ApplicationId)
    -> RepositoryResult<Option<LoanApplication>>;
    fn list_applications(&self, query: ListQuery)
    -> RepositoryResult<(usize, Vec<LoanApplication>)>;
}

pub trait ApplicationWriter {
    fn update_application_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> RepositoryResult<LoanApplication>;
}

pub trait LenderReader {
    fn get_lender_by_id(&self, id: LenderId) -> RepositoryResult<Option<Lender>>;
    fn list_lenders(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Lender>)>;
}

pub trait LenderWriter {
    fn create_lender(&self, new_lender: &NewLender) -> RepositoryResult<Lender>;
}

pub trait AggregatorReader {
    fn list_aggregators(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Aggregator>)>;
}

pub trait CommissionReader {
    fn list_commissions(&self, query: ListQuery)
    -> RepositoryResult<(usize, Vec<CommissionEntry>)>;
}

pub trait PayoutReader {
    fn list_payouts(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Payout>)>;
}

pub trait UserReader {
    fn get_user_by_email(&self, email: &Email) -> RepositoryResult<Option<DashboardUser>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<DashboardUser>;
    fn update_profile(
        &self,
        email: &Email,
        updates: &UpdateProfile,
    ) -> RepositoryResult<DashboardUser>;
}

pub trait AnalyticsReader {
    fn volume_series(&self, scope: PartnerScope) -> RepositoryResult<Vec<VolumePoint>>;
}
