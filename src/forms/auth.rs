//! Sign-in and sign-up forms.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct SignInForm {
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "password too short"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignUpForm {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    #[validate(length(min = 8, message = "password too short"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "passwords don't match"))]
    pub confirm_password: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;
    use crate::forms::field_errors;

    #[test]
    fn test_signin_rejects_short_password() {
        let form = SignInForm {
            email: "asha@partnerdesk.in".to_string(),
            password: "1234567".to_string(),
        };

        let errors = form.validate().unwrap_err();
        let map = field_errors(&errors);
        assert_eq!(
            map.get("password").map(String::as_str),
            Some("password too short")
        );
    }

    #[test]
    fn test_signup_rejects_mismatched_passwords() {
        let form = SignUpForm {
            name: "Asha Verma".to_string(),
            email: "asha@partnerdesk.in".to_string(),
            password: "correct horse".to_string(),
            confirm_password: "battery staple".to_string(),
            role: "lender".to_string(),
        };

        let errors = form.validate().unwrap_err();
        let map = field_errors(&errors);
        assert_eq!(
            map.get("confirm_password").map(String::as_str),
            Some("passwords don't match")
        );
    }

    #[test]
    fn test_signup_accepts_matching_passwords() {
        let form = SignUpForm {
            name: "Asha Verma".to_string(),
            email: "asha@partnerdesk.in".to_string(),
            password: "correct horse".to_string(),
            confirm_password: "correct horse".to_string(),
            role: "lender".to_string(),
        };

        assert!(form.validate().is_ok());
    }
}
