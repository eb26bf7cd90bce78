//! Services behind the loan applications screen.

use crate::domain::application::ApplicationStatus;
use crate::domain::types::ApplicationId;
use crate::dto::FacetOption;
use crate::dto::applications::{ApplicationRow, ApplicationsPageData, ApplicationsQuery};
use crate::forms::applications::UpdateStatusForm;
use crate::listing::{DEFAULT_PAGE_SIZE, FACET_ALL, ListFilter, Paginated, total_pages};
use crate::models::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;
use crate::repository::{ApplicationReader, ApplicationWriter, LenderReader, ListQuery};
use crate::routes::ensure_role;
use crate::services::{ServiceError, ServiceResult, scope_for};
use crate::SUPER_ADMIN_ROLE;

/// Statuses the review form may move an application into. `Pending` is the
/// intake state and `Disbursed` is set by the payments pipeline, so neither
/// is reachable from the dashboard.
const REVIEW_STATUSES: [ApplicationStatus; 3] = [
    ApplicationStatus::UnderReview,
    ApplicationStatus::Approved,
    ApplicationStatus::Rejected,
];

pub fn load_applications_page<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: ApplicationsQuery,
) -> ServiceResult<ApplicationsPageData>
where
    R: ApplicationReader + LenderReader + ?Sized,
{
    let scope = scope_for(user)?;
    let is_admin = user.has_role(SUPER_ADMIN_ROLE);

    let page = query.page.unwrap_or(1);
    let mut filter = ListFilter::new()
        .search(query.search.clone().unwrap_or_default())
        .facet("status", query.status.clone().unwrap_or_default());
    // Partner accounts are already confined to one lender by scope; the
    // lender facet is an admin refinement.
    if is_admin {
        filter = filter.facet("lender", query.lender.clone().unwrap_or_default());
    }
    let search_query = filter.search_term().unwrap_or_default().to_string();

    let (total, applications) = repo.list_applications(
        ListQuery::new()
            .scope(scope)
            .filter(filter)
            .paginate(page, DEFAULT_PAGE_SIZE),
    )?;

    let lenders = if is_admin {
        let (_, lenders) = repo.list_lenders(ListQuery::new())?;
        lenders.into_iter().map(|lender| lender.name).collect()
    } else {
        Vec::new()
    };

    let rows: Vec<ApplicationRow> = applications.iter().map(ApplicationRow::from).collect();

    Ok(ApplicationsPageData {
        applications: Paginated::new(rows, page, total_pages(total, DEFAULT_PAGE_SIZE)),
        total,
        search_query,
        status: query.status.unwrap_or_else(|| FACET_ALL.to_string()),
        lender: query.lender.unwrap_or_else(|| FACET_ALL.to_string()),
        statuses: ApplicationStatus::ALL
            .iter()
            .map(|status| FacetOption::new(status.as_str(), status.label()))
            .collect(),
        lenders,
        can_update_status: is_admin,
    })
}

/// Moves an application to a new review status.
pub fn update_status<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: UpdateStatusForm,
) -> ServiceResult<()>
where
    R: ApplicationWriter + ?Sized,
{
    ensure_role(user, SUPER_ADMIN_ROLE)?;

    let application_id = ApplicationId::new(form.id)?;
    let status = form.status.parse::<ApplicationStatus>()?;
    if !REVIEW_STATUSES.contains(&status) {
        return Err(ServiceError::Form(format!(
            "applications cannot be moved to {} from the dashboard",
            status.label()
        )));
    }

    repo.update_application_status(application_id, status)
        .map_err(|err| match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => {
                log::error!("Failed to update application status: {other}");
                ServiceError::from(other)
            }
        })?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;
    use crate::{AGGREGATOR_ROLE, LENDER_ROLE};

    fn admin_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "a81f5be2-3c64-4be0-9f99-3f1c0b6e51aa".to_string(),
            name: "Asha Verma".to_string(),
            email: "admin@partnerdesk.in".to_string(),
            role: SUPER_ADMIN_ROLE.to_string(),
            partner_id: None,
            exp: 0,
        }
    }

    fn lender_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "c2f6a2de-71e5-4f9b-8f62-90f5f3d1a7b4".to_string(),
            name: "Priya Krishnan".to_string(),
            email: "priya@nimbusfinance.in".to_string(),
            role: LENDER_ROLE.to_string(),
            partner_id: Some(1),
            exp: 0,
        }
    }

    fn unassigned_user() -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "e94d27b3-55a8-4c21-b6ff-0d8f1e2a9c37".to_string(),
            name: "Arjun Malhotra".to_string(),
            email: "arjun@bharatloans.in".to_string(),
            role: AGGREGATOR_ROLE.to_string(),
            partner_id: None,
            exp: 0,
        }
    }

    #[test]
    fn update_status_requires_super_admin() {
        let mut repo = MockRepository::new();
        repo.expect_update_application_status().times(0);
        let form = UpdateStatusForm {
            id: 3,
            status: "approved".to_string(),
        };

        let result = update_status(&repo, &lender_user(), form);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    #[test]
    fn update_status_rejects_non_review_statuses() {
        let mut repo = MockRepository::new();
        repo.expect_update_application_status().times(0);
        let form = UpdateStatusForm {
            id: 3,
            status: "disbursed".to_string(),
        };

        let result = update_status(&repo, &admin_user(), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn update_status_rejects_unknown_status_token() {
        let mut repo = MockRepository::new();
        repo.expect_update_application_status().times(0);
        let form = UpdateStatusForm {
            id: 3,
            status: "escalated".to_string(),
        };

        let result = update_status(&repo, &admin_user(), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    /// The parsed id and status reach the repository; a missing row comes
    /// back as `NotFound` rather than a generic repository error.
    #[test]
    fn update_status_maps_missing_application_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_update_application_status()
            .withf(|id, status| id.get() == 3 && *status == ApplicationStatus::Approved)
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));
        let form = UpdateStatusForm {
            id: 3,
            status: "approved".to_string(),
        };

        let result = update_status(&repo, &admin_user(), form);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    /// Accounts without a partner assignment cannot derive a scope and are
    /// turned away before the repository is touched.
    #[test]
    fn list_requires_partner_assignment() {
        let mut repo = MockRepository::new();
        repo.expect_list_applications().times(0);
        repo.expect_list_lenders().times(0);

        let result =
            load_applications_page(&repo, &unassigned_user(), ApplicationsQuery::default());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    /// The lender facet is ignored for partner accounts; scope already pins
    /// their lender and the facet would let them probe other names.
    #[test]
    fn list_drops_lender_facet_for_partner_accounts() {
        let mut repo = MockRepository::new();
        repo.expect_list_applications()
            .withf(|query| query.filter.facet_value("lender").is_none())
            .times(1)
            .returning(|_| Ok((0, vec![])));

        let query = ApplicationsQuery {
            lender: Some("BlueStone Credit".to_string()),
            ..Default::default()
        };
        let data = load_applications_page(&repo, &lender_user(), query).expect("page loads");

        assert!(!data.can_update_status);
        assert!(data.lenders.is_empty());
    }
}
