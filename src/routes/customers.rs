use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::customers::{AddCustomerForm, EditCustomerForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, customers};

#[get("/customers")]
pub async fn show_customers(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match customers::load_customers(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "customers");
            context.insert("page", &data);
            render_template(&tera, "commerce/customers.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "customers", err),
    }
}

#[post("/customers/add")]
pub async fn add_customer(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddCustomerForm>,
) -> impl Responder {
    match customers::create_customer(repo.get_ref(), form).await {
        Ok(customer) => {
            FlashMessage::success(format!("Cliente {} creado.", customer.full_name())).send();
        }
        Err(err) => flash_service_error(err, "create customer", "No se pudo crear el cliente."),
    }
    redirect("/customers")
}

#[post("/customers/edit")]
pub async fn edit_customer(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditCustomerForm>,
) -> impl Responder {
    match customers::modify_customer(repo.get_ref(), form).await {
        Ok(customer) => {
            FlashMessage::success(format!("Cliente {} actualizado.", customer.full_name())).send();
        }
        Err(err) => flash_service_error(
            err,
            "update customer",
            "No se pudo actualizar el cliente.",
        ),
    }
    redirect("/customers")
}

/// Target of the confirmation dialog. The record is kept but marked inactive.
#[post("/customers/{customer_id}/deactivate")]
pub async fn deactivate_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<RestRepository>,
) -> impl Responder {
    match customers::deactivate_customer(repo.get_ref(), customer_id.into_inner()).await {
        Ok(customer) => {
            FlashMessage::success(format!("Cliente {} desactivado.", customer.full_name())).send();
        }
        Err(err) => flash_service_error(
            err,
            "deactivate customer",
            "No se pudo desactivar el cliente.",
        ),
    }
    redirect("/customers")
}
