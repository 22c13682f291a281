use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::suppliers::{AddSupplierForm, EditSupplierForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, suppliers};

#[get("/catalog/suppliers")]
pub async fn show_suppliers(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match suppliers::load_suppliers(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "catalog/suppliers");
            context.insert("page", &data);
            render_template(&tera, "catalog/suppliers.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "catalog/suppliers", err),
    }
}

#[post("/catalog/suppliers/add")]
pub async fn add_supplier(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddSupplierForm>,
) -> impl Responder {
    match suppliers::create_supplier(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Proveedor #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "create supplier", "No se pudo crear el proveedor."),
    }
    redirect("/catalog/suppliers")
}

#[post("/catalog/suppliers/edit")]
pub async fn edit_supplier(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditSupplierForm>,
) -> impl Responder {
    match suppliers::modify_supplier(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Proveedor #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update supplier",
            "No se pudo actualizar el proveedor.",
        ),
    }
    redirect("/catalog/suppliers")
}
