//! Read-only JSON API used by integrations and the frontend poller.

use crate::dto::api::{ApplicationsQuery, ApplicationsResponse};
use crate::listing::{DEFAULT_PAGE_SIZE, ListFilter};
use crate::models::auth::AuthenticatedUser;
use crate::repository::{ApplicationReader, ListQuery};
use crate::services::{ServiceResult, scope_for};

/// Lists applications visible to the caller. Rows come back unpaginated
/// when no page is requested so integrations can pull a full export.
pub fn list_applications<R>(
    repo: &R,
    user: &AuthenticatedUser,
    params: ApplicationsQuery,
) -> ServiceResult<ApplicationsResponse>
where
    R: ApplicationReader + ?Sized,
{
    let scope = scope_for(user)?;

    let mut query = ListQuery::new().scope(scope).filter(
        ListFilter::new()
            .search(params.search.unwrap_or_default())
            .facet("status", params.status.unwrap_or_default()),
    );
    if let Some(page) = params.page {
        query = query.paginate(page, DEFAULT_PAGE_SIZE);
    }

    let (total, applications) = repo.list_applications(query)?;

    Ok(ApplicationsResponse {
        total,
        page: params.page.unwrap_or(1),
        per_page: DEFAULT_PAGE_SIZE,
        applications,
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::LENDER_ROLE;
    use crate::repository::PartnerScope;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

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

    #[test]
    fn list_is_scoped_to_the_callers_lender() {
        let mut repo = MockRepository::new();
        repo.expect_list_applications()
            .withf(|query| {
                matches!(query.scope, PartnerScope::Lender(id) if id.get() == 1)
                    && query.pagination.is_none()
            })
            .times(1)
            .returning(|_| Ok((0, vec![])));

        let response =
            list_applications(&repo, &lender_user(), ApplicationsQuery::default())
                .expect("response");

        assert_eq!(response.total, 0);
        assert_eq!(response.page, 1);
        assert_eq!(response.per_page, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn list_rejects_unknown_roles() {
        let mut repo = MockRepository::new();
        repo.expect_list_applications().times(0);

        let mut user = lender_user();
        user.role = "ops".to_string();
        let result = list_applications(&repo, &user, ApplicationsQuery::default());

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }
}
