//! Lender and aggregator directory screens.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::partners::PartnersQuery;
use crate::models::auth::AuthenticatedUser;
use crate::repository::memory::MemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, partners as partners_service};

#[get("/partners/lenders")]
pub async fn lenders(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    params: web::Query<PartnersQuery>,
) -> impl Responder {
    match partners_service::load_lenders_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "lenders");
            context.insert("lenders", &data.lenders);
            context.insert("total", &data.total);
            context.insert("search_query", &data.search_query);
            context.insert("status", &data.status);
            context.insert("statuses", &data.statuses);
            context.insert("aggregators", &data.aggregators);
            context.insert("can_add", &data.can_add);

            render_template(&tera, "partners/lenders.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list lenders: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/partners/lenders/add")]
pub async fn add_lender(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    form: web::Bytes,
) -> impl Responder {
    match partners_service::add_lender(repo.get_ref(), &user, form.as_ref()) {
        Ok(lender) => {
            FlashMessage::success(format!("Lender {} added.", lender.name)).send();
            redirect("/partners/lenders")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/partners/lenders")
        }
        Err(err) => {
            log::error!("Failed to add a lender: {err}");
            FlashMessage::error("Failed to add the lender.").send();
            redirect("/partners/lenders")
        }
    }
}

#[get("/partners/aggregators")]
pub async fn aggregators(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    params: web::Query<PartnersQuery>,
) -> impl Responder {
    match partners_service::load_aggregators_page(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "aggregators");
            context.insert("aggregators", &data.aggregators);
            context.insert("total", &data.total);
            context.insert("search_query", &data.search_query);
            context.insert("status", &data.status);
            context.insert("statuses", &data.statuses);

            render_template(&tera, "partners/aggregators.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list aggregators: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
