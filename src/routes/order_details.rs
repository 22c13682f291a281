use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::order_details::{AddOrderDetailForm, EditOrderDetailForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, order_details};

#[get("/order-details")]
pub async fn show_order_details(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match order_details::load_order_details(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "order-details");
            context.insert("page", &data);
            render_template(&tera, "commerce/order_details.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "order-details", err),
    }
}

#[post("/order-details/add")]
pub async fn add_order_detail(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddOrderDetailForm>,
) -> impl Responder {
    match order_details::create_order_detail(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Detalle de pedido #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create order detail",
            "No se pudo crear el detalle de pedido.",
        ),
    }
    redirect("/order-details")
}

#[post("/order-details/edit")]
pub async fn edit_order_detail(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditOrderDetailForm>,
) -> impl Responder {
    match order_details::modify_order_detail(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Detalle de pedido #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update order detail",
            "No se pudo actualizar el detalle de pedido.",
        ),
    }
    redirect("/order-details")
}
