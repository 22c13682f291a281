use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::RestRepository;
use crate::routes::{base_context, list_load_failed, render_template};
use crate::services::dashboard;

#[get("/")]
pub async fn show_dashboard(
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match dashboard::load_dashboard(repo.get_ref()).await {
        Ok(summary) => {
            let mut context = base_context(&flash_messages, "dashboard");
            context.insert("summary", &summary);
            render_template(&tera, "dashboard.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "dashboard", err),
    }
}
