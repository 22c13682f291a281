use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::order_history::{AddPurchaseRecordForm, EditPurchaseRecordForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, order_history};

#[get("/order-history")]
pub async fn show_purchase_records(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match order_history::load_purchase_records(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "order-history");
            context.insert("page", &data);
            render_template(&tera, "commerce/order_history.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "order-history", err),
    }
}

#[post("/order-history/add")]
pub async fn add_purchase_record(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddPurchaseRecordForm>,
) -> impl Responder {
    match order_history::create_purchase_record(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Registro de compra #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create purchase record",
            "No se pudo crear el registro de compra.",
        ),
    }
    redirect("/order-history")
}

#[post("/order-history/edit")]
pub async fn edit_purchase_record(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditPurchaseRecordForm>,
) -> impl Responder {
    match order_history::modify_purchase_record(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Registro de compra #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update purchase record",
            "No se pudo actualizar el registro de compra.",
        ),
    }
    redirect("/order-history")
}
