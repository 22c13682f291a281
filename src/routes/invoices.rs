use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::invoices::{AddInvoiceForm, EditInvoiceForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, invoices};

#[get("/catalog/invoices")]
pub async fn show_invoices(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match invoices::load_invoices(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "catalog/invoices");
            context.insert("page", &data);
            render_template(&tera, "catalog/invoices.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "catalog/invoices", err),
    }
}

#[post("/catalog/invoices/add")]
pub async fn add_invoice(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddInvoiceForm>,
) -> impl Responder {
    match invoices::create_invoice(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Factura #{} creada.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "create invoice", "No se pudo crear la factura."),
    }
    redirect("/catalog/invoices")
}

#[post("/catalog/invoices/edit")]
pub async fn edit_invoice(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditInvoiceForm>,
) -> impl Responder {
    match invoices::modify_invoice(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Factura #{} actualizada.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "update invoice", "No se pudo actualizar la factura."),
    }
    redirect("/catalog/invoices")
}
