//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::analytics::VolumePoint;
use crate::domain::application::{ApplicationStatus, LoanApplication};
use crate::domain::commission::CommissionEntry;
use crate::domain::partner::{Aggregator, Lender, NewLender};
use crate::domain::payout::Payout;
use crate::domain::types::{ApplicationId, Email, LenderId};
use crate::domain::user::{DashboardUser, NewUser, UpdateProfile};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AggregatorReader, AnalyticsReader, ApplicationReader, ApplicationWriter, CommissionReader,
    LenderReader, LenderWriter, ListQuery, PartnerScope, PayoutReader, UserReader, UserWriter,
};

mock! {
    pub Repository {}

    impl ApplicationReader for Repository {
        fn get_application_by_id(
            &self,
            id: ApplicationId,
        ) -> RepositoryResult<Option<LoanApplication>>;
        fn list_applications(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<LoanApplication>)>;
    }

    impl ApplicationWriter for Repository {
        fn update_application_status(
            &self,
            id: ApplicationId,
            status: ApplicationStatus,
        ) -> RepositoryResult<LoanApplication>;
    }

    impl LenderReader for Repository {
        fn get_lender_by_id(&self, id: LenderId) -> RepositoryResult<Option<Lender>>;
        fn list_lenders(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Lender>)>;
    }

    impl LenderWriter for Repository {
        fn create_lender(&self, new_lender: &NewLender) -> RepositoryResult<Lender>;
    }

    impl AggregatorReader for Repository {
        fn list_aggregators(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Aggregator>)>;
    }

    impl CommissionReader for Repository {
        fn list_commissions(
            &self,
            query: ListQuery,
        ) -> RepositoryResult<(usize, Vec<CommissionEntry>)>;
    }

    impl PayoutReader for Repository {
        fn list_payouts(&self, query: ListQuery) -> RepositoryResult<(usize, Vec<Payout>)>;
    }

    impl UserReader for Repository {
        fn get_user_by_email(&self, email: &Email) -> RepositoryResult<Option<DashboardUser>>;
    }

    impl UserWriter for Repository {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<DashboardUser>;
        fn update_profile(
            &self,
            email: &Email,
            updates: &UpdateProfile,
        ) -> RepositoryResult<DashboardUser>;
    }

    impl AnalyticsReader for Repository {
        fn volume_series(&self, scope: PartnerScope) -> RepositoryResult<Vec<VolumePoint>>;
    }
}
