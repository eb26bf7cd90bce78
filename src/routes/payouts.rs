//! Payouts screen.

use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::payouts::PayoutsQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::memory::MemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, payouts as payouts_service};

#[get("/payouts")]
pub async fn payouts(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    params: web::Query<PayoutsQuery>,
) -> impl Responder {
    match payouts_service::load_payouts_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "payouts");
            context.insert("payouts", &data.payouts);
            context.insert("total", &data.total);
            context.insert("search_query", &data.search_query);
            context.insert("status", &data.status);
            context.insert("method", &data.method);
            context.insert("statuses", &data.statuses);
            context.insert("methods", &data.methods);

            render_template(&tera, "payouts/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list payouts: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
