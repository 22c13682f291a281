use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::cart_details::{AddCartDetailForm, EditCartDetailForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, cart_details};

#[get("/cart-details")]
pub async fn show_cart_details(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match cart_details::load_cart_details(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "cart-details");
            context.insert("page", &data);
            render_template(&tera, "commerce/cart_details.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "cart-details", err),
    }
}

#[post("/cart-details/add")]
pub async fn add_cart_detail(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddCartDetailForm>,
) -> impl Responder {
    match cart_details::create_cart_detail(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Detalle de carrito #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create cart detail",
            "No se pudo crear el detalle de carrito.",
        ),
    }
    redirect("/cart-details")
}

#[post("/cart-details/edit")]
pub async fn edit_cart_detail(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditCartDetailForm>,
) -> impl Responder {
    match cart_details::modify_cart_detail(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Detalle de carrito #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update cart detail",
            "No se pudo actualizar el detalle de carrito.",
        ),
    }
    redirect("/cart-details")
}
