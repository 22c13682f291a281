use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::orders::{AddOrderForm, ChangeStageForm, EditOrderForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, orders};

#[get("/orders")]
pub async fn show_orders(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match orders::load_orders(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "orders");
            context.insert("page", &data);
            render_template(&tera, "commerce/orders.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "orders", err),
    }
}

#[post("/orders/add")]
pub async fn add_order(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddOrderForm>,
) -> impl Responder {
    match orders::create_order(repo.get_ref(), form).await {
        Ok(order) => {
            FlashMessage::success(format!("Pedido #{} creado.", order.id)).send();
        }
        Err(err) => flash_service_error(err, "create order", "No se pudo crear el pedido."),
    }
    redirect("/orders")
}

#[post("/orders/edit")]
pub async fn edit_order(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditOrderForm>,
) -> impl Responder {
    match orders::modify_order(repo.get_ref(), form).await {
        Ok(order) => {
            FlashMessage::success(format!("Pedido #{} actualizado.", order.id)).send();
        }
        Err(err) => flash_service_error(err, "update order", "No se pudo actualizar el pedido."),
    }
    redirect("/orders")
}

#[post("/orders/{order_id}/stage")]
pub async fn change_order_stage(
    order_id: web::Path<i32>,
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<ChangeStageForm>,
) -> impl Responder {
    let order_id = order_id.into_inner();
    match orders::change_order_stage(repo.get_ref(), order_id, form).await {
        Ok(stage) => {
            FlashMessage::success(format!(
                "Pedido #{order_id} marcado como {}.",
                stage.label()
            )).send();
        }
        Err(err) => flash_service_error(
            err,
            "change order stage",
            "No se pudo cambiar el estado del pedido.",
        ),
    }
    redirect("/orders")
}
