use actix_cors::Cors;
use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::repository::memory::MemoryRepository;
use crate::routes::analytics::analytics;
use crate::routes::api::list_applications;
use crate::routes::applications::{applications, update_status};
use crate::routes::auth::{logout, signin, signin_page, signup, signup_page};
use crate::routes::commissions::commissions;
use crate::routes::main::{index, not_assigned};
use crate::routes::partners::{add_lender, aggregators, lenders};
use crate::routes::payouts::payouts;
use crate::routes::settings::{settings, update_profile};

pub mod domain;
pub mod dto;
pub mod forms;
pub mod listing;
pub mod middleware;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub const SUPER_ADMIN_ROLE: &str = "super_admin";
pub const LENDER_ROLE: &str = "lender";
pub const AGGREGATOR_ROLE: &str = "aggregator";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Everything is served out of the seeded in-memory dataset.
    let repo = MemoryRepository::new();

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(signin_page)
            .service(signin)
            .service(signup_page)
            .service(signup)
            .service(web::scope("/api").service(list_applications))
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(index)
                    .service(not_assigned)
                    .service(applications)
                    .service(update_status)
                    .service(commissions)
                    .service(payouts)
                    .service(lenders)
                    .service(add_lender)
                    .service(aggregators)
                    .service(analytics)
                    .service(settings)
                    .service(update_profile)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
