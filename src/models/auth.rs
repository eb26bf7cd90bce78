//! Session identity carried in the JWT cookie.
//!
//! The token is issued at sign-in, stored through `actix-identity`, and
//! decoded again on every request by the [`AuthenticatedUser`] extractor.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::user::DashboardUser;
use crate::models::config::ServerConfig;

/// Days a session token stays valid.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Claims of a signed-in dashboard user, embedded in the session JWT.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuthenticatedUser {
    /// Public user id.
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Partner the account belongs to; `None` for super admins.
    pub partner_id: Option<i32>,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

impl AuthenticatedUser {
    /// Builds claims for a freshly signed-in user.
    #[must_use]
    pub fn from_user(user: &DashboardUser) -> Self {
        let exp = (Utc::now() + Duration::days(SESSION_TTL_DAYS)).timestamp() as usize;
        Self {
            sub: user.uid.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.as_str().to_string(),
            partner_id: user.partner_id,
            exp,
        }
    }

    /// Signs the claims with the server secret.
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Decodes and verifies a token, including its expiry.
    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }

    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = match Identity::from_request(req, payload).into_inner() {
            Ok(identity) => identity,
            Err(_) => return ready(Err(ErrorUnauthorized("not signed in"))),
        };
        let token = match identity.id() {
            Ok(token) => token,
            Err(_) => return ready(Err(ErrorUnauthorized("session lost"))),
        };
        let Some(config) = req.app_data::<web::Data<ServerConfig>>() else {
            return ready(Err(ErrorInternalServerError("server config missing")));
        };
        let user = AuthenticatedUser::from_jwt(&token, &config.secret)
            .map_err(|_| ErrorUnauthorized("invalid session token"));
        ready(user)
    }
}
