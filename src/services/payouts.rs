//! Services behind the payouts screen.
//!
//! Payouts are transfers to lender settlement accounts; like commissions the
//! screen is closed to aggregator accounts.

use crate::domain::payout::{PayoutMethod, PayoutStatus};
use crate::dto::FacetOption;
use crate::dto::payouts::{PayoutRow, PayoutsPageData, PayoutsQuery};
use crate::listing::{DEFAULT_PAGE_SIZE, FACET_ALL, ListFilter, Paginated, total_pages};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ListQuery, PayoutReader};
use crate::routes::ensure_any_role;
use crate::services::{ServiceResult, scope_for};
use crate::{LENDER_ROLE, SUPER_ADMIN_ROLE};

pub fn load_payouts_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: PayoutsQuery,
) -> ServiceResult<PayoutsPageData>
where
    R: PayoutReader + ?Sized,
{
    ensure_any_role(user, &[SUPER_ADMIN_ROLE, LENDER_ROLE])?;
    let scope = scope_for(user)?;

    let page = query.page.unwrap_or(1);
    let filter = ListFilter::new()
        .search(query.search.clone().unwrap_or_default())
        .facet("status", query.status.clone().unwrap_or_default())
        .facet("method", query.method.clone().unwrap_or_default());
    let search_query = filter.search_term().unwrap_or_default().to_string();

    let (total, payouts) = repo.list_payouts(
        ListQuery::new()
            .scope(scope)
            .filter(filter)
            .paginate(page, DEFAULT_PAGE_SIZE),
    )?;

    let rows: Vec<PayoutRow> = payouts.iter().map(PayoutRow::from).collect();

    Ok(PayoutsPageData {
        payouts: Paginated::new(rows, page, total_pages(total, DEFAULT_PAGE_SIZE)),
        total,
        search_query,
        status: query.status.unwrap_or_else(|| FACET_ALL.to_string()),
        method: query.method.unwrap_or_else(|| FACET_ALL.to_string()),
        statuses: PayoutStatus::ALL
            .iter()
            .map(|status| FacetOption::new(status.as_str(), status.label()))
            .collect(),
        methods: PayoutMethod::ALL
            .iter()
            .map(|method| FacetOption::new(method.as_str(), method.as_str()))
            .collect(),
    })
}
