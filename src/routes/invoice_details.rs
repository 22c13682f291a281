use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::invoice_details::{AddInvoiceDetailForm, EditInvoiceDetailForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, invoice_details};

#[get("/catalog/invoice-details")]
pub async fn show_invoice_details(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match invoice_details::load_invoice_details(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "catalog/invoice-details");
            context.insert("page", &data);
            render_template(&tera, "catalog/invoice_details.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "catalog/invoice-details", err),
    }
}

#[post("/catalog/invoice-details/add")]
pub async fn add_invoice_detail(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddInvoiceDetailForm>,
) -> impl Responder {
    match invoice_details::create_invoice_detail(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Detalle de factura #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create invoice detail",
            "No se pudo crear el detalle de factura.",
        ),
    }
    redirect("/catalog/invoice-details")
}

#[post("/catalog/invoice-details/edit")]
pub async fn edit_invoice_detail(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditInvoiceDetailForm>,
) -> impl Responder {
    match invoice_details::modify_invoice_detail(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Detalle de factura #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update invoice detail",
            "No se pudo actualizar el detalle de factura.",
        ),
    }
    redirect("/catalog/invoice-details")
}
