use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::payment_methods::{AddPaymentMethodForm, EditPaymentMethodForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, payment_methods};

#[get("/payment-methods")]
pub async fn show_payment_methods(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match payment_methods::load_payment_methods(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "payment-methods");
            context.insert("page", &data);
            render_template(&tera, "commerce/payment_methods.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "payment-methods", err),
    }
}

#[post("/payment-methods/add")]
pub async fn add_payment_method(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddPaymentMethodForm>,
) -> impl Responder {
    match payment_methods::create_payment_method(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Método de pago #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create payment method",
            "No se pudo crear el método de pago.",
        ),
    }
    redirect("/payment-methods")
}

#[post("/payment-methods/edit")]
pub async fn edit_payment_method(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditPaymentMethodForm>,
) -> impl Responder {
    match payment_methods::modify_payment_method(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Método de pago #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update payment method",
            "No se pudo actualizar el método de pago.",
        ),
    }
    redirect("/payment-methods")
}
