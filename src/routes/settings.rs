//! Settings screen.

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::settings::UpdateProfileForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::memory::MemoryRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, settings as settings_service};

#[get("/settings")]
pub async fn settings(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match settings_service::load_settings_page(repo.get_ref(), &user) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &user, "settings");
            context.insert("profile", &data.profile);

            render_template(&tera, "settings/index.html", &context)
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Account not found.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to load settings: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/settings/profile")]
pub async fn update_profile(
    user: AuthenticatedUser,
    repo: web::Data<MemoryRepository>,
    web::Form(form): web::Form<UpdateProfileForm>,
) -> impl Responder {
    match settings_service::update_profile(repo.get_ref(), &user, form) {
        Ok(()) => {
            FlashMessage::success("Profile updated.").send();
            redirect("/settings")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/settings")
        }
        Err(ServiceError::NotFound) => {
            FlashMessage::error("Account not found.").send();
            redirect("/na")
        }
        Err(err) => {
            log::error!("Failed to update profile: {err}");
            FlashMessage::error("Failed to update profile.").send();
            redirect("/settings")
        }
    }
}
