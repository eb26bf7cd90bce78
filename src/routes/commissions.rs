//! Commissions screen.

use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::commissions::CommissionsQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::memory::MemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, commissions as commissions_service};

#[get("/commissions")]
pub async fn commissions(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    params: web::Query<CommissionsQuery>,
) -> impl Responder {
    match commissions_service::load_commissions_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "commissions");
            context.insert("entries", &data.entries);
            context.insert("total", &data.total);
            context.insert("search_query", &data.search_query);
            context.insert("status", &data.status);
            context.insert("period", &data.period);
            context.insert("statuses", &data.statuses);
            context.insert("periods", &data.periods);

            render_template(&tera, "commissions/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list commissions: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
