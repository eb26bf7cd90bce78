//! Services behind the lender and aggregator directories.

use std::collections::HashMap;

use validator::Validate;

use crate::domain::partner::{Lender, NewLender, PartnerStatus};
use crate::dto::FacetOption;
use crate::dto::partners::{AggregatorRow, AggregatorsPageData, LenderRow, LendersPageData, PartnersQuery};
use crate::forms::field_errors;
use crate::forms::partners::AddLenderForm;
use crate::listing::{DEFAULT_PAGE_SIZE, FACET_ALL, ListFilter, Paginated, total_pages};
use crate::models::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;
use crate::repository::{AggregatorReader, LenderReader, LenderWriter, ListQuery};
use crate::routes::{ensure_any_role, ensure_role};
use crate::services::{ServiceError, ServiceResult, scope_for};
use crate::{AGGREGATOR_ROLE, SUPER_ADMIN_ROLE};

fn status_options() -> Vec<FacetOption> {
    PartnerStatus::ALL
        .iter()
        .map(|status| FacetOption::new(status.as_str(), status.label()))
        .collect()
}

pub fn load_lenders_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: PartnersQuery,
) -> ServiceResult<LendersPageData>
where
    R: LenderReader + AggregatorReader + ?Sized,
{
    ensure_any_role(user, &[SUPER_ADMIN_ROLE, AGGREGATOR_ROLE])?;
    let scope = scope_for(user)?;
    let is_admin = user.has_role(SUPER_ADMIN_ROLE);

    let page = query.page.unwrap_or(1);
    let filter = ListFilter::new()
        .search(query.search.clone().unwrap_or_default())
        .facet("status", query.status.clone().unwrap_or_default());
    let search_query = filter.search_term().unwrap_or_default().to_string();

    let (total, lenders) = repo.list_lenders(
        ListQuery::new()
            .scope(scope)
            .filter(filter)
            .paginate(page, DEFAULT_PAGE_SIZE),
    )?;

    // Scoped, so aggregator accounts only resolve their own name here.
    let (_, aggregators) = repo.list_aggregators(ListQuery::new().scope(scope))?;
    let names: HashMap<i32, String> = aggregators
        .iter()
        .map(|aggregator| (aggregator.id, aggregator.name.clone()))
        .collect();

    let rows: Vec<LenderRow> = lenders
        .iter()
        .map(|lender| {
            let sourced_by = lender
                .aggregator_id
                .and_then(|id| names.get(&id).cloned());
            LenderRow::new(lender, sourced_by)
        })
        .collect();

    Ok(LendersPageData {
        lenders: Paginated::new(rows, page, total_pages(total, DEFAULT_PAGE_SIZE)),
        total,
        search_query,
        status: query.status.unwrap_or_else(|| FACET_ALL.to_string()),
        statuses: status_options(),
        aggregators: aggregators
            .iter()
            .map(|aggregator| FacetOption::new(&aggregator.id.to_string(), &aggregator.name))
            .collect(),
        can_add: is_admin,
    })
}

/// Onboards a lender from the raw form body. The body is parsed here rather
/// than by an extractor because `products` arrives as repeated keys.
pub fn add_lender<R>(repo: &R, user: &AuthenticatedUser, form: &[u8]) -> ServiceResult<Lender>
where
    R: LenderWriter + ?Sized,
{
    ensure_role(user, SUPER_ADMIN_ROLE)?;

    let form: AddLenderForm = serde_html_form::from_bytes(form).map_err(|err| {
        log::error!("Failed to parse lender form: {err}");
        ServiceError::Form("invalid form data".to_string())
    })?;

    if let Err(errors) = form.validate() {
        let mut messages: Vec<String> = field_errors(&errors)
            .into_iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        messages.sort();
        return Err(ServiceError::Form(messages.join("; ")));
    }

    let payload = NewLender::try_from(form)?;

    let lender = repo.create_lender(&payload).map_err(|err| match err {
        RepositoryError::ConstraintViolation(message) => ServiceError::Form(message),
        other => {
            log::error!("Failed to create lender: {other}");
            ServiceError::from(other)
        }
    })?;

    Ok(lender)
}

pub fn load_aggregators_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: PartnersQuery,
) -> ServiceResult<AggregatorsPageData>
where
    R: AggregatorReader + ?Sized,
{
    ensure_role(user, SUPER_ADMIN_ROLE)?;
    let scope = scope_for(user)?;

    let page = query.page.unwrap_or(1);
    let filter = ListFilter::new()
        .search(query.search.clone().unwrap_or_default())
        .facet("status", query.status.clone().unwrap_or_default());
    let search_query = filter.search_term().unwrap_or_default().to_string();

    let (total, aggregators) = repo.list_aggregators(
        ListQuery::new()
            .scope(scope)
            .filter(filter)
            .paginate(page, DEFAULT_PAGE_SIZE),
    )?;

    let rows: Vec<AggregatorRow> = aggregators.iter().map(AggregatorRow::from).collect();

    Ok(AggregatorsPageData {
        aggregators: Paginated::new(rows, page, total_pages(total, DEFAULT_PAGE_SIZE)),
        total,
        search_query,
        status: query.status.unwrap_or_else(|| FACET_ALL.to_string()),
        statuses: status_options(),
    })
}
