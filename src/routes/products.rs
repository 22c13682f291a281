use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, products};

#[get("/catalog/products")]
pub async fn show_products(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match products::load_products(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "catalog/products");
            context.insert("page", &data);
            render_template(&tera, "catalog/products.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "catalog/products", err),
    }
}

#[post("/catalog/products/add")]
pub async fn add_product(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddProductForm>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Producto #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "create product", "No se pudo crear el producto."),
    }
    redirect("/catalog/products")
}

#[post("/catalog/products/edit")]
pub async fn edit_product(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditProductForm>,
) -> impl Responder {
    match products::modify_product(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Producto #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update product",
            "No se pudo actualizar el producto.",
        ),
    }
    redirect("/catalog/products")
}
