//! Services behind the commissions screen.
//!
//! Commission entries accrue to the lender that disbursed the loans, so the
//! screen is only offered to super admins and lender accounts.

use crate::domain::commission::CommissionStatus;
use crate::dto::FacetOption;
use crate::dto::commissions::{CommissionRow, CommissionsPageData, CommissionsQuery};
use crate::listing::{DEFAULT_PAGE_SIZE, FACET_ALL, ListFilter, Paginated, total_pages};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{CommissionReader, ListQuery};
use crate::routes::ensure_any_role;
use crate::services::{ServiceResult, scope_for};
use crate::{LENDER_ROLE, SUPER_ADMIN_ROLE};

pub fn load_commissions_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: CommissionsQuery,
) -> ServiceResult<CommissionsPageData>
where
    R: CommissionReader + ?Sized,
{
    ensure_any_role(user, &[SUPER_ADMIN_ROLE, LENDER_ROLE])?;
    let scope = scope_for(user)?;

    let page = query.page.unwrap_or(1);
    let filter = ListFilter::new()
        .search(query.search.clone().unwrap_or_default())
        .facet("status", query.status.clone().unwrap_or_default())
        .facet("period", query.period.clone().unwrap_or_default());
    let search_query = filter.search_term().unwrap_or_default().to_string();

    let (total, entries) = repo.list_commissions(
        ListQuery::new()
            .scope(scope)
            .filter(filter)
            .paginate(page, DEFAULT_PAGE_SIZE),
    )?;

    // Period dropdown is built from the rows the caller may see, newest first.
    let (_, visible) = repo.list_commissions(ListQuery::new().scope(scope))?;
    let mut periods: Vec<String> = visible.into_iter().map(|entry| entry.period).collect();
    periods.sort();
    periods.dedup();
    periods.reverse();

    let rows: Vec<CommissionRow> = entries.iter().map(CommissionRow::from).collect();

    Ok(CommissionsPageData {
        entries: Paginated::new(rows, page, total_pages(total, DEFAULT_PAGE_SIZE)),
        total,
        search_query,
        status: query.status.unwrap_or_else(|| FACET_ALL.to_string()),
        period: query.period.unwrap_or_else(|| FACET_ALL.to_string()),
        statuses: CommissionStatus::ALL
            .iter()
            .map(|status| FacetOption::new(status.as_str(), status.label()))
            .collect(),
        periods,
    })
}
