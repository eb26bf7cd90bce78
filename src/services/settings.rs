//! Account settings.

use validator::Validate;

use crate::domain::types::Email;
use crate::domain::user::UpdateProfile;
use crate::dto::settings::{ProfileView, SettingsPageData};
use crate::forms::field_errors;
use crate::forms::settings::UpdateProfileForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn load_settings_page<R>(repo: &R, user: &AuthenticatedUser) -> ServiceResult<SettingsPageData>
where
    R: UserReader + ?Sized,
{
    let email = Email::new(user.email.clone())?;
    let account = repo
        .get_user_by_email(&email)?
        .ok_or(ServiceError::NotFound)?;

    Ok(SettingsPageData {
        profile: ProfileView::from(&account),
    })
}

/// Applies name and phone changes to the caller's own account.
pub fn update_profile<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: UpdateProfileForm,
) -> ServiceResult<()>
where
    R: UserWriter + ?Sized,
{
    if let Err(errors) = form.validate() {
        let mut messages: Vec<String> = field_errors(&errors).into_values().collect();
        messages.sort();
        return Err(ServiceError::Form(messages.join("; ")));
    }

    let phone = match form.phone.trim() {
        "" => None,
        raw => Some(raw.to_string()),
    };
    let updates = UpdateProfile::new(form.name, phone)?;
    let email = Email::new(user.email.clone())?;

    repo.update_profile(&email, &updates).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::NotFound,
        other => {
            log::error!("Failed to update profile: {other}");
            ServiceError::from(other)
        }
    })?;

    Ok(())
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::LENDER_ROLE;
    use crate::domain::user::{DashboardUser, UserRole};
    use crate::repository::mock::MockRepository;

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

    fn lender_account() -> DashboardUser {
        DashboardUser {
            id: 2,
            uid: Uuid::new_v4(),
            name: "Priya Krishnan".to_string(),
            email: "priya@nimbusfinance.in".to_string(),
            phone: None,
            role: UserRole::Lender,
            partner_id: Some(1),
            joined_at: NaiveDate::from_ymd_opt(2024, 11, 4).expect("valid date"),
        }
    }

    #[test]
    fn load_returns_the_callers_profile() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email()
            .withf(|email| email.as_str() == "priya@nimbusfinance.in")
            .returning(|_| Ok(Some(lender_account())));

        let data = load_settings_page(&repo, &lender_user()).expect("profile loads");

        assert_eq!(data.profile.email, "priya@nimbusfinance.in");
        assert_eq!(data.profile.role, "lender");
    }

    #[test]
    fn load_missing_account_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email().returning(|_| Ok(None));

        let result = load_settings_page(&repo, &lender_user());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn update_profile_rejects_bad_phone_numbers() {
        let mut repo = MockRepository::new();
        repo.expect_update_profile().times(0);

        let form = UpdateProfileForm {
            name: "Priya Krishnan".to_string(),
            phone: "12345".to_string(),
        };
        let result = update_profile(&repo, &lender_user(), form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn update_profile_persists_changes() {
        let mut repo = MockRepository::new();
        repo.expect_update_profile()
            .withf(|email, updates| {
                email.as_str() == "priya@nimbusfinance.in"
                    && updates.name == "Priya K"
                    && updates.phone.as_deref() == Some("+919820012345")
            })
            .times(1)
            .returning(|_, _| Ok(lender_account()));

        let form = UpdateProfileForm {
            name: "Priya K".to_string(),
            phone: "+91 98200 12345".to_string(),
        };

        assert!(update_profile(&repo, &lender_user(), form).is_ok());
    }

    #[test]
    fn update_profile_clears_phone_when_blank() {
        let mut repo = MockRepository::new();
        repo.expect_update_profile()
            .withf(|_, updates| updates.phone.is_none())
            .times(1)
            .returning(|_, _| Ok(lender_account()));

        let form = UpdateProfileForm {
            name: "Priya Krishnan".to_string(),
            phone: "  ".to_string(),
        };

        assert!(update_profile(&repo, &lender_user(), form).is_ok());
    }
}
