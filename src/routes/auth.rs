//! Sign-in, sign-up and sign-out handlers.

use actix_identity::Identity;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;
use validator::Validate;

use crate::domain::user::UserRole;
use crate::dto::FacetOption;
use crate::forms::auth::{SignInForm, SignUpForm};
use crate::forms::field_errors;
use crate::models::config::ServerConfig;
use crate::repository::memory::MemoryRepository;
use crate::routes::{guest_context, redirect, render_template};
use crate::services::{ServiceError, auth as auth_service};

fn role_options() -> Vec<FacetOption> {
    UserRole::ALL
        .iter()
        .map(|role| FacetOption::new(role.as_str(), role.label()))
        .collect()
}

#[get("/auth/signin")]
pub async fn signin_page(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = guest_context(&flash_messages);
    render_template(&tera, "auth/signin.html", &context)
}

#[post("/auth/signin")]
pub async fn signin(
    req: HttpRequest,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<SignInForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        let mut context = guest_context(&flash_messages);
        context.insert("errors", &field_errors(&errors));
        context.insert("email", &form.email);
        return render_template(&tera, "auth/signin.html", &context);
    }

    match auth_service::sign_in(repo.get_ref(), form, &server_config.secret) {
        Ok(token) => {
            if let Err(err) = Identity::login(&req.extensions(), token) {
                log::error!("Failed to start session: {err}");
                FlashMessage::error("Failed to start session.").send();
                return redirect("/auth/signin");
            }
            redirect("/")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("No account with that email.").send();
            redirect("/auth/signin")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/auth/signin")
        }
        Err(err) => {
            log::error!("Failed to sign in: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/auth/signup")]
pub async fn signup_page(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = guest_context(&flash_messages);
    context.insert("roles", &role_options());
    render_template(&tera, "auth/signup.html", &context)
}

#[post("/auth/signup")]
pub async fn signup(
    req: HttpRequest,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<MemoryRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<SignUpForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        let mut context = guest_context(&flash_messages);
        context.insert("errors", &field_errors(&errors));
        context.insert("roles", &role_options());
        context.insert("name", &form.name);
        context.insert("email", &form.email);
        context.insert("role", &form.role);
        return render_template(&tera, "auth/signup.html", &context);
    }

    match auth_service::sign_up(repo.get_ref(), form, &server_config.secret) {
        Ok(token) => {
            if let Err(err) = Identity::login(&req.extensions(), token) {
                log::error!("Failed to start session: {err}");
                FlashMessage::error("Failed to start session.").send();
                return redirect("/auth/signin");
            }
            redirect("/")
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/auth/signup")
        }
        Err(err) => {
            log::error!("Failed to sign up: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/logout")]
pub async fn logout(user: Identity) -> impl Responder {
    user.logout();
    redirect("/auth/signin")
}
