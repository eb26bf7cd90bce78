//! Loan applications screen.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::applications::ApplicationsQuery;
use crate::forms::applications::UpdateStatusForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::memory::MemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, applications as applications_service};

#[get("/applications")]
pub async fn applications(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    params: web::Query<ApplicationsQuery>,
) -> impl Responder {
    match applications_service::load_applications_page(repo.get_ref(), &user, params.into_inner())
    {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "applications");
            context.insert("applications", &data.applications);
            context.insert("total", &data.total);
            context.insert("search_query", &data.search_query);
            context.insert("status", &data.status);
            context.insert("lender", &data.lender);
            context.insert("statuses", &data.statuses);
            context.insert("lenders", &data.lenders);
            context.insert("can_update_status", &data.can_update_status);

            render_template(&tera, "applications/index.html", &context)
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to list applications: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/applications/status")]
pub async fn update_status(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    web::Form(form): web::Form<UpdateStatusForm>,
) -> impl Responder {
    match applications_service::update_status(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Application status updated.").send();
            redirect("/applications")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Insufficient permissions.").send();
            redirect("/na")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Application not found.").send();
            redirect("/applications")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/applications")
        }
        Err(err) => {
            log::error!("Failed to update application status: {err}");
            FlashMessage::error("Failed to update application status.").send();
            redirect("/applications")
        }
    }
}
