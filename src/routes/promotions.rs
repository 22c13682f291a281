use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::promotions::{AddPromotionForm, EditPromotionForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, promotions};

#[get("/catalog/promotions")]
pub async fn show_promotions(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match promotions::load_promotions(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "catalog/promotions");
            context.insert("page", &data);
            render_template(&tera, "catalog/promotions.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "catalog/promotions", err),
    }
}

#[post("/catalog/promotions/add")]
pub async fn add_promotion(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddPromotionForm>,
) -> impl Responder {
    match promotions::create_promotion(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Promoción #{} creada.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "create promotion", "No se pudo crear la promoción."),
    }
    redirect("/catalog/promotions")
}

#[post("/catalog/promotions/edit")]
pub async fn edit_promotion(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditPromotionForm>,
) -> impl Responder {
    match promotions::modify_promotion(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Promoción #{} actualizada.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update promotion",
            "No se pudo actualizar la promoción.",
        ),
    }
    redirect("/catalog/promotions")
}
