//! Volume and status analytics.

use crate::domain::application::ApplicationStatus;
use crate::domain::types::Money;
use crate::dto::analytics::{AnalyticsPageData, StatusSlice, VolumePointRow};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{AnalyticsReader, ApplicationReader, ListQuery};
use crate::services::{ServiceResult, scope_for};

pub fn load_analytics_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<AnalyticsPageData>
where
    R: AnalyticsReader + ApplicationReader + ?Sized,
{
    let scope = scope_for(user)?;

    let series = repo.volume_series(scope)?;
    let total_disbursed = Money::from_paise(series.iter().map(|p| p.disbursed.paise()).sum());
    let total_applications = series.iter().map(|p| p.applications).sum();
    let max_paise = series
        .iter()
        .map(|p| p.disbursed.paise())
        .max()
        .unwrap_or(0)
        .max(1);
    let points = series.iter().map(VolumePointRow::from).collect();

    let (_, applications) = repo.list_applications(ListQuery::new().scope(scope))?;
    let breakdown = ApplicationStatus::ALL
        .iter()
        .map(|status| StatusSlice {
            status: status.as_str().to_string(),
            label: status.label().to_string(),
            count: applications.iter().filter(|a| a.status == *status).count(),
        })
        .collect();

    Ok(AnalyticsPageData {
        points,
        breakdown,
        total_disbursed: total_disbursed.to_string(),
        total_applications,
        max_paise,
    })
}
