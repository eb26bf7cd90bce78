//! Dashboard and not-assigned pages.

use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::models::auth::AuthenticatedUser;
use crate::repository::memory::MemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, main as main_service};

#[get("/")]
pub async fn index(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_dashboard_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "dashboard");
            context.insert("stats", &data.stats);
            context.insert("recent", &data.recent);

            render_template(&tera, "main/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => redirect("/na"),
        Err(err) => {
            log::error!("Failed to load dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Landing page for accounts that cannot see any data yet, either because
/// the role is unknown or no partner is assigned.
#[get("/na")]
pub async fn not_assigned(
    user: AuthenticatedUser,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, &user, "na");
    render_template(&tera, "main/not_assigned.html", &context)
}
