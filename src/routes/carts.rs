use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::carts::{AddCartForm, EditCartForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, carts};

#[get("/carts")]
pub async fn show_carts(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match carts::load_carts(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "carts");
            context.insert("page", &data);
            render_template(&tera, "commerce/carts.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "carts", err),
    }
}

#[post("/carts/add")]
pub async fn add_cart(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddCartForm>,
) -> impl Responder {
    match carts::create_cart(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Carrito #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "create cart", "No se pudo crear el carrito."),
    }
    redirect("/carts")
}

#[post("/carts/edit")]
pub async fn edit_cart(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditCartForm>,
) -> impl Responder {
    match carts::modify_cart(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Carrito #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "update cart", "No se pudo actualizar el carrito."),
    }
    redirect("/carts")
}
