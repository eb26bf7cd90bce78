//! Dashboard overview.

use crate::domain::application::{ApplicationStatus, LoanApplication};
use crate::domain::partner::PartnerStatus;
use crate::dto::applications::ApplicationRow;
use crate::dto::main::{DashboardPageData, DashboardStats};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{AnalyticsReader, ApplicationReader, LenderReader, ListQuery};
use crate::services::{ServiceResult, scope_for};

/// Number of applications shown in the recent activity table.
const RECENT_LIMIT: usize = 5;

pub fn load_dashboard_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<DashboardPageData>
where
    R: ApplicationReader + LenderReader + AnalyticsReader + ?Sized,
{
    let scope = scope_for(user)?;

    let (total_applications, applications) =
        repo.list_applications(ListQuery::new().scope(scope))?;
    let pending_review = applications
        .iter()
        .filter(|a| {
            matches!(
                a.status,
                ApplicationStatus::Pending | ApplicationStatus::UnderReview
            )
        })
        .count();
    let disbursed = applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Disbursed)
        .count();

    let (_, lenders) = repo.list_lenders(ListQuery::new().scope(scope))?;
    let active_lenders = lenders
        .iter()
        .filter(|l| l.status == PartnerStatus::Active)
        .count();

    // The series is month-ascending, so the last point is the current month.
    let series = repo.volume_series(scope)?;
    let (month_label, month_volume) = match series.last() {
        Some(point) => (point.month.clone(), point.disbursed.to_string()),
        None => (String::new(), "₹0".to_string()),
    };

    let mut recent: Vec<&LoanApplication> = applications.iter().collect();
    recent.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
    let recent = recent
        .into_iter()
        .take(RECENT_LIMIT)
        .map(ApplicationRow::from)
        .collect();

    Ok(DashboardPageData {
        stats: DashboardStats {
            total_applications,
            pending_review,
            disbursed,
            active_lenders,
            month_label,
            month_volume,
        },
        recent,
    })
}
