//! Analytics screen.

use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::models::auth::AuthenticatedUser;
use crate::repository::memory::MemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, analytics as analytics_service};

#[get("/analytics")]
pub async fn analytics(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match analytics_service::load_analytics_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "analytics");
            context.insert("points", &data.points);
            context.insert("breakdown", &data.breakdown);
            context.insert("total_disbursed", &data.total_disbursed);
            context.insert("total_applications", &data.total_applications);
            context.insert("max_paise", &data.max_paise);

            render_template(&tera, "analytics/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load analytics: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
