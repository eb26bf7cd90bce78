//! HTTP handlers plus the small helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::models::auth::AuthenticatedUser;
use crate::services::{ServiceError, ServiceResult};

pub mod analytics;
pub mod api;
pub mod applications;
pub mod auth;
pub mod commissions;
pub mod main;
pub mod partners;
pub mod payouts;
pub mod settings;

/// Maps a flash level to the alert class templates use.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Renders a template, or logs the failure and returns a 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok().content_type("text/html").body(body),
        Err(err) => {
            log::error!("Failed to render {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// 303 redirect, so form posts land on a GET.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Context shared by screens rendered outside a session: just the alerts.
pub fn guest_context(flash_messages: &IncomingFlashMessages) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();
    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context
}

/// Context shared by all signed-in screens: alerts, the current user and
/// which navigation item is active.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: &AuthenticatedUser,
    current_page: &str,
) -> Context {
    let mut context = guest_context(flash_messages);
    context.insert("current_user", user);
    context.insert("current_page", current_page);
    context
}

/// True when the signed-in user carries `role`.
pub fn check_role(user: &AuthenticatedUser, role: &str) -> bool {
    user.has_role(role)
}

/// Role guard used at the top of service operations.
pub fn ensure_role(user: &AuthenticatedUser, role: &str) -> ServiceResult<()> {
    if check_role(user, role) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Like [`ensure_role`] for screens open to several roles.
pub fn ensure_any_role(user: &AuthenticatedUser, roles: &[&str]) -> ServiceResult<()> {
    if roles.iter().any(|role| check_role(user, role)) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}
