use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{HttpRequest, HttpResponse, Responder, route, web};

use crate::repository::RestRepository;

/// Same-origin pass-through to the commerce backend.
///
/// Method, body, content type and status code are forwarded unchanged.
#[route(
    "/api/{tail:.*}",
    method = "GET",
    method = "POST",
    method = "PUT",
    method = "PATCH",
    method = "DELETE"
)]
pub async fn proxy_api(
    req: HttpRequest,
    tail: web::Path<String>,
    body: web::Bytes,
    repo: web::Data<RestRepository>,
) -> impl Responder {
    let tail = tail.into_inner();
    let path_and_query = match req.uri().query() {
        Some(query) => format!("{tail}?{query}"),
        None => tail,
    };
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    match repo
        .commerce()
        .forward(
            req.method().as_str(),
            &path_and_query,
            content_type,
            body.to_vec(),
        )
        .await
    {
        Ok(forwarded) => {
            let status = StatusCode::from_u16(forwarded.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let mut response = HttpResponse::build(status);
            if let Some(content_type) = forwarded.content_type {
                response.content_type(content_type);
            }
            response.body(forwarded.body)
        }
        Err(err) => {
            log::error!("Failed to proxy {} /api/{path_and_query}: {err}", req.method());
            HttpResponse::BadGateway().finish()
        }
    }
}
