use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::product_purchases::{AddProductPurchaseForm, EditProductPurchaseForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, product_purchases};

#[get("/catalog/product-purchases")]
pub async fn show_product_purchases(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match product_purchases::load_product_purchases(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "catalog/product-purchases");
            context.insert("page", &data);
            render_template(&tera, "catalog/product_purchases.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "catalog/product-purchases", err),
    }
}

#[post("/catalog/product-purchases/add")]
pub async fn add_product_purchase(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddProductPurchaseForm>,
) -> impl Responder {
    match product_purchases::create_product_purchase(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Compra de producto #{} creada.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create product purchase",
            "No se pudo crear la compra de producto.",
        ),
    }
    redirect("/catalog/product-purchases")
}

#[post("/catalog/product-purchases/edit")]
pub async fn edit_product_purchase(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditProductPurchaseForm>,
) -> impl Responder {
    match product_purchases::modify_product_purchase(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Compra de producto #{} actualizada.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update product purchase",
            "No se pudo actualizar la compra de producto.",
        ),
    }
    redirect("/catalog/product-purchases")
}
