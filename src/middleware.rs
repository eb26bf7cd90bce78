//! Request middleware for the guarded part of the site.

use std::future::{Future, Ready, ready};
use std::pin::Pin;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{Error, HttpResponse};

/// Turns any unauthorized outcome into a redirect to the sign-in page.
///
/// Both shapes of 401 are covered: handlers responding with the status and
/// extractors failing before the handler runs.
pub struct RedirectUnauthorized;

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware { service }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: S,
}

fn signin_redirect() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/auth/signin"))
        .finish()
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let http_req = req.request().clone();
        let fut = self.service.call(req);
        Box::pin(async move {
            match fut.await {
                Ok(res) if res.status() == StatusCode::UNAUTHORIZED => {
                    let (req, _) = res.into_parts();
                    Ok(ServiceResponse::new(
                        req,
                        signin_redirect().map_into_right_body(),
                    ))
                }
                Ok(res) => Ok(res.map_into_left_body()),
                Err(err)
                    if err.as_response_error().status_code() == StatusCode::UNAUTHORIZED =>
                {
                    Ok(ServiceResponse::new(
                        http_req,
                        signin_redirect().map_into_right_body(),
                    ))
                }
                Err(err) => Err(err),
            }
        })
    }
}
