use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::promotion_products::{AddPromotionProductForm, EditPromotionProductForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, promotion_products};

#[get("/catalog/promotion-products")]
pub async fn show_promotion_products(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match promotion_products::load_promotion_products(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "catalog/promotion-products");
            context.insert("page", &data);
            render_template(&tera, "catalog/promotion_products.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "catalog/promotion-products", err),
    }
}

#[post("/catalog/promotion-products/add")]
pub async fn add_promotion_product(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddPromotionProductForm>,
) -> impl Responder {
    match promotion_products::create_promotion_product(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Producto en promoción #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create promotion product",
            "No se pudo crear el producto en promoción.",
        ),
    }
    redirect("/catalog/promotion-products")
}

#[post("/catalog/promotion-products/edit")]
pub async fn edit_promotion_product(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditPromotionProductForm>,
) -> impl Responder {
    match promotion_products::modify_promotion_product(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Producto en promoción #{} actualizado.", record.id))
                .send();
        }
        Err(err) => flash_service_error(
            err,
            "update promotion product",
            "No se pudo actualizar el producto en promoción.",
        ),
    }
    redirect("/catalog/promotion-products")
}
