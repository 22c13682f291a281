use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

use crate::APP_NAME;
use crate::domain::OrderStage;
use crate::domain::payment_method::PAYMENT_KINDS;
use crate::services::ServiceError;

pub mod api;
pub mod auth;
pub mod cart_details;
pub mod carts;
pub mod catalog;
pub mod customers;
pub mod dashboard;
pub mod inventory;
pub mod invoice_details;
pub mod invoices;
pub mod login_security;
pub mod order_details;
pub mod order_history;
pub mod orders;
pub mod payment_methods;
pub mod product_purchases;
pub mod product_reviews;
pub mod products;
pub mod promotion_products;
pub mod promotions;
pub mod roles;
pub mod suppliers;
pub mod surfaces;
pub mod users;

/// A pending flash message rendered as a toast.
#[derive(Debug, Serialize)]
struct Alert {
    level: &'static str,
    message: String,
}

fn alert_level(level: Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        Level::Info | Level::Debug => "info",
    }
}

/// Context shared by every page: toasts, the active sidebar entry and the
/// option lists used by the dialogs.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts: Vec<Alert> = flash_messages
        .iter()
        .map(|message| Alert {
            level: alert_level(message.level()),
            message: message.content().to_string(),
        })
        .collect();

    let stages: Vec<&str> = OrderStage::ALL.iter().map(OrderStage::as_str).collect();

    let mut context = Context::new();
    context.insert("app_name", APP_NAME);
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context.insert("order_stages", &stages);
    context.insert("payment_kinds", &PAYMENT_KINDS);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_with_status(tera, template, context, StatusCode::OK)
}

fn render_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Post/redirect/get: send the browser back to a list page.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}

/// Error page shown when a list cannot be loaded from the backend.
pub fn list_load_failed(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    current_page: &str,
    err: ServiceError,
) -> HttpResponse {
    log::error!("Failed to load {current_page}: {err}");

    let mut context = base_context(flash_messages, current_page);
    context.insert("error_message", &err.to_string());
    render_with_status(tera, "error.html", &context, StatusCode::BAD_GATEWAY)
}

/// Queue a toast describing a failed create or update.
///
/// Validation and backend refusals are shown verbatim; everything else is
/// logged and replaced by `fallback`.
pub fn flash_service_error(err: ServiceError, action: &str, fallback: &str) {
    let message = match err {
        ServiceError::Form(message) => format!("Datos inválidos: {message}"),
        ServiceError::Backend(message) | ServiceError::Conflict(message) => {
            format!("{fallback} {message}")
        }
        ServiceError::NotFound => "El registro ya no existe.".to_string(),
        ServiceError::Unauthorized => "Operación no autorizada.".to_string(),
        ServiceError::Repository(err) => {
            log::error!("Failed to {action}: {err}");
            fallback.to_string()
        }
    };
    FlashMessage::error(message).send();
}
