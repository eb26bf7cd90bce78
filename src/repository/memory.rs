//! In-memory storage backend.
//!
//! All collections live behind one `RwLock`, cloned handles share the same
//! dataset. The server seeds it once at startup; nothing is persisted across
//! restarts.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use rand::RngExt;
use uuid::Uuid;

use crate::domain::analytics::{MonthlyVolume, VolumePoint};
use crate::domain::application::{ApplicationStatus, LoanApplication};
use crate::domain::commission::CommissionEntry;
use crate::domain::partner::{Aggregator, Lender, NewLender, PartnerStatus};
use crate::domain::payout::Payout;
use crate::domain::types::{ApplicationId, Email, LenderId, Money};
use crate::domain::user::{DashboardUser, NewUser, UpdateProfile};
use crate::listing::{Filterable, paginate};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AggregatorReader, AnalyticsReader, ApplicationReader, ApplicationWriter, CommissionReader,
    LenderReader, LenderWriter, ListQuery, PartnerScope, PayoutReader, UserReader, UserWriter,
    seed,
};

/// Backing collections for the in-memory store.
#[derive(Debug, Default)]
pub struct Dataset {
    pub lenders: Vec<Lender>,
    pub aggregators: Vec<Aggregator>,
    pub applications: Vec<LoanApplication>,
    pub commissions: Vec<CommissionEntry>,
    pub payouts: Vec<Payout>,
    pub users: Vec<DashboardUser>,
    pub volumes: Vec<MonthlyVolume>,
}

/// Shared handle to the dataset. Cheap to clone; every clone sees the same
/// records.
#[derive(Clone)]
pub struct MemoryRepository {
    dataset: Arc<RwLock<Dataset>>,
}

impl MemoryRepository {
    /// Creates a repository pre-loaded with the demo dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::from_dataset(seed::dataset())
    }

    #[must_use]
    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(RwLock::new(dataset)),
        }
    }
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Scopes, filters and paginates one collection. Relative record order is
/// preserved throughout, so page N+1 always continues where page N ended.
fn page_of<T, F>(records: &[T], query: &ListQuery, covers: F) -> (usize, Vec<T>)
where
    T: Filterable + Clone,
    F: Fn(&PartnerScope, &T) -> bool,
{
    let visible: Vec<&T> = records
        .iter()
        .filter(|record| covers(&query.scope, record))
        .filter(|record| query.filter.matches(*record))
        .collect();

    match query.pagination {
        Some(pagination) => {
            let (total, page) = paginate(&visible, pagination);
            (total, page.into_iter().cloned().collect())
        }
        None => (visible.len(), visible.into_iter().cloned().collect()),
    }
}

/// Allocates a `PFX-1042` style code not already taken.
fn next_code<'a>(prefix: &str, taken: impl Iterator<Item = &'a str> + Clone) -> String {
    let mut rng = rand::rng();
    loop {
        let candidate = format!("{prefix}-{}", rng.random_range(1000..10_000));
        if !taken.clone().any(|code| code == candidate) {
            return candidate;
        }
    }
}

impl ApplicationReader for MemoryRepository {
    fn get_application_by_id(
        &self,
        id: ApplicationId,
    ) -> RepositoryResult<Option<LoanApplication>> {
        let dataset = self.dataset.read()?;
        Ok(dataset
            .applications
            .iter()
            .find(|application| application.id == id.get())
            .cloned())
    }

    fn list_applications(
        &self,
        query: ListQuery,
    ) -> RepositoryResult<(usize, Vec<LoanApplication>)> {
        let dataset = self.dataset.read()?;
        Ok(page_of(&dataset.applications, &query, |scope, application| {
            scope.covers_application(application)
        }))
    }
}

impl ApplicationWriter for MemoryRepository {
    fn update_application_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> RepositoryResult<LoanApplication> {
        let mut dataset = self.dataset.write()?;
        let application = dataset
            .applications
            .iter_mut()
            .find(|application| application.id == id.get())
            .ok_or(RepositoryError::NotFound)?;
        application.status = status;
        Ok(application.clone())
    }
}

impl LenderReader for MemoryRepository {
    fn get_lender_by_id(&self, id: LenderId) -> RepositoryResult<Option<Lender>> {
        let dataset = self.dataset.read()?;
        Ok(dataset
            .lenders
            .iter()
            .find(|lender| lender.id == id.get())
            .cloned())
    }

    fn list_lenders(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Lender>)> {
        let dataset = self.dataset.read()?;
        Ok(page_of(&dataset.lenders, &query, |scope, lender| {
            scope.covers_lender(lender)
        }))
    }
}

impl LenderWriter for MemoryRepository {
    fn create_lender(&self, new_lender: &NewLender) -> RepositoryResult<Lender> {
        let mut dataset = self.dataset.write()?;

        if let Some(aggregator_id) = new_lender.aggregator_id {
            let known = dataset
                .aggregators
                .iter()
                .any(|aggregator| aggregator.id == aggregator_id);
            if !known {
                return Err(RepositoryError::ConstraintViolation(format!(
                    "unknown aggregator: {aggregator_id}"
                )));
            }
        }

        let id = dataset.lenders.iter().map(|lender| lender.id).max().unwrap_or(0) + 1;
        let code = next_code("LND", dataset.lenders.iter().map(|lender| lender.code.as_str()));
        let lender = Lender {
            id,
            name: new_lender.name.clone(),
            code,
            contact_email: new_lender.contact_email.clone(),
            contact_phone: new_lender.contact_phone.clone(),
            city: new_lender.city.clone(),
            products: new_lender.products.clone(),
            commission_bps: new_lender.commission_bps,
            status: PartnerStatus::Pending,
            monthly_volume: Money::from_paise(0),
            aggregator_id: new_lender.aggregator_id,
            onboarded_at: Utc::now().date_naive(),
            notes: new_lender.notes.clone(),
        };
        dataset.lenders.push(lender.clone());

        if let Some(aggregator_id) = new_lender.aggregator_id
            && let Some(aggregator) = dataset
                .aggregators
                .iter_mut()
                .find(|aggregator| aggregator.id == aggregator_id)
        {
            aggregator.lender_count += 1;
        }

        Ok(lender)
    }
}

impl AggregatorReader for MemoryRepository {
    fn list_aggregators(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Aggregator>)> {
        let dataset = self.dataset.read()?;
        Ok(page_of(&dataset.aggregators, &query, |scope, aggregator| {
            match scope {
                PartnerScope::All => true,
                PartnerScope::Lender(_) => false,
                PartnerScope::Aggregator(id) => aggregator.id == id.get(),
            }
        }))
    }
}

impl CommissionReader for MemoryRepository {
    fn list_commissions(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<CommissionEntry>)> {
        let dataset = self.dataset.read()?;
        Ok(page_of(&dataset.commissions, &query, |scope, entry| {
            scope.covers_settlement(entry.partner_id)
        }))
    }
}

impl PayoutReader for MemoryRepository {
    fn list_payouts(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Payout>)> {
        let dataset = self.dataset.read()?;
        Ok(page_of(&dataset.payouts, &query, |scope, payout| {
            scope.covers_settlement(payout.partner_id)
        }))
    }
}

impl UserReader for MemoryRepository {
    fn get_user_by_email(&self, email: &Email) -> RepositoryResult<Option<DashboardUser>> {
        let dataset = self.dataset.read()?;
        Ok(dataset
            .users
            .iter()
            .find(|user| user.email == email.as_str())
            .cloned())
    }
}

impl UserWriter for MemoryRepository {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<DashboardUser> {
        let mut dataset = self.dataset.write()?;

        if dataset.users.iter().any(|user| user.email == new_user.email) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "email already registered: {}",
                new_user.email
            )));
        }

        let id = dataset.users.iter().map(|user| user.id).max().unwrap_or(0) + 1;
        let user = DashboardUser {
            id,
            uid: Uuid::new_v4(),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            phone: None,
            role: new_user.role,
            partner_id: new_user.partner_id,
            joined_at: Utc::now().date_naive(),
        };
        dataset.users.push(user.clone());
        Ok(user)
    }

    fn update_profile(
        &self,
        email: &Email,
        updates: &UpdateProfile,
    ) -> RepositoryResult<DashboardUser> {
        let mut dataset = self.dataset.write()?;
        let user = dataset
            .users
            .iter_mut()
            .find(|user| user.email == email.as_str())
            .ok_or(RepositoryError::NotFound)?;
        user.name = updates.name.clone();
        user.phone = updates.phone.clone();
        Ok(user.clone())
    }
}

impl AnalyticsReader for MemoryRepository {
    fn volume_series(&self, scope: PartnerScope) -> RepositoryResult<Vec<VolumePoint>> {
        let dataset = self.dataset.read()?;
        let mut months: BTreeMap<String, (i64, u32)> = BTreeMap::new();
        for row in dataset.volumes.iter().filter(|row| scope.covers_volume(row)) {
            let entry = months.entry(row.month.clone()).or_default();
            entry.0 += row.disbursed.paise();
            entry.1 += row.applications;
        }
        Ok(months
            .into_iter()
            .map(|(month, (paise, applications))| VolumePoint {
                month,
                disbursed: Money::from_paise(paise),
                applications,
            })
            .collect())
    }
}
