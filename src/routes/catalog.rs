use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::routes::{base_context, render_template};

/// Landing page linking every catalog backend page.
#[get("/catalog")]
pub async fn show_catalog(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "catalog");
    render_template(&tera, "catalog/index.html", &context)
}
