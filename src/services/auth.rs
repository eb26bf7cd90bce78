//! Sign-in and account registration.
//!
//! There is no credential store behind the dashboard; the directory itself
//! is the credential. Sign-in succeeds for any known email, and sign-up
//! creates the account on the spot. Both hand back a signed session token.

use crate::domain::types::Email;
use crate::domain::user::{NewUser, UserRole};
use crate::forms::auth::{SignInForm, SignUpForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::errors::RepositoryError;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

pub fn sign_in<R>(repo: &R, form: SignInForm, secret: &str) -> ServiceResult<String>
where
    R: UserReader + ?Sized,
{
    let email = Email::new(form.email)?;
    let user = repo
        .get_user_by_email(&email)?
        .ok_or(ServiceError::Unauthorized)?;

    let claims = AuthenticatedUser::from_user(&user);
    claims.to_jwt(secret).map_err(|err| {
        log::error!("Failed to issue session token: {err}");
        ServiceError::Internal("failed to issue session token".to_string())
    })
}

/// Registers an account and signs it in.
///
/// Lender and aggregator accounts start without a partner assignment and
/// only see the not-assigned page until one is made.
pub fn sign_up<R>(repo: &R, form: SignUpForm, secret: &str) -> ServiceResult<String>
where
    R: UserReader + UserWriter + ?Sized,
{
    let role = form.role.parse::<UserRole>()?;
    let new_user = NewUser::new(form.name, form.email, role, None)?;

    let user = repo.create_user(&new_user).map_err(|err| match err {
        RepositoryError::ConstraintViolation(_) => {
            ServiceError::Form("email already registered".to_string())
        }
        other => {
            log::error!("Failed to create user: {other}");
            ServiceError::from(other)
        }
    })?;

    let claims = AuthenticatedUser::from_user(&user);
    claims.to_jwt(secret).map_err(|err| {
        log::error!("Failed to issue session token: {err}");
        ServiceError::Internal("failed to issue session token".to_string())
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;
    use crate::domain::user::DashboardUser;
    use crate::repository::mock::MockRepository;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

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
    fn sign_in_rejects_unknown_email() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email().returning(|_| Ok(None));

        let form = SignInForm {
            email: "nobody@partnerdesk.in".to_string(),
            password: "irrelevant".to_string(),
        };

        let result = sign_in(&repo, form, SECRET);

        assert!(matches!(result, Err(ServiceError::Unauthorized)));
    }

    /// Sign-in normalizes the email before the lookup and the token carries
    /// the account's role and partner link.
    #[test]
    fn sign_in_issues_token_for_known_email() {
        let mut repo = MockRepository::new();
        repo.expect_get_user_by_email()
            .withf(|email| email.as_str() == "priya@nimbusfinance.in")
            .returning(|_| Ok(Some(lender_account())));

        let form = SignInForm {
            email: "Priya@NimbusFinance.in".to_string(),
            password: "irrelevant".to_string(),
        };

        let token = sign_in(&repo, form, SECRET).expect("token issued");
        let claims = AuthenticatedUser::from_jwt(&token, SECRET).expect("token decodes");

        assert_eq!(claims.email, "priya@nimbusfinance.in");
        assert_eq!(claims.role, "lender");
        assert_eq!(claims.partner_id, Some(1));
    }

    #[test]
    fn sign_up_rejects_unknown_role() {
        let mut repo = MockRepository::new();
        repo.expect_create_user().times(0);

        let form = SignUpForm {
            name: "Rohit Shah".to_string(),
            email: "rohit@finbridge.in".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            role: "auditor".to_string(),
        };

        let result = sign_up(&repo, form, SECRET);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn sign_up_duplicate_email_is_a_form_error() {
        let mut repo = MockRepository::new();
        repo.expect_create_user().returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "email already registered: rohit@finbridge.in".to_string(),
            ))
        });

        let form = SignUpForm {
            name: "Rohit Shah".to_string(),
            email: "rohit@finbridge.in".to_string(),
            password: "longenough".to_string(),
            confirm_password: "longenough".to_string(),
            role: "aggregator".to_string(),
        };

        let result = sign_up(&repo, form, SECRET);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
