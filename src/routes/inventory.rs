use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::inventory::{AddInventoryItemForm, EditInventoryItemForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, inventory};

#[get("/catalog/inventory")]
pub async fn show_inventory_items(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match inventory::load_inventory_items(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "catalog/inventory");
            context.insert("page", &data);
            render_template(&tera, "catalog/inventory.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "catalog/inventory", err),
    }
}

#[post("/catalog/inventory/add")]
pub async fn add_inventory_item(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddInventoryItemForm>,
) -> impl Responder {
    match inventory::create_inventory_item(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Registro de inventario #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create inventory item",
            "No se pudo crear el registro de inventario.",
        ),
    }
    redirect("/catalog/inventory")
}

#[post("/catalog/inventory/edit")]
pub async fn edit_inventory_item(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditInventoryItemForm>,
) -> impl Responder {
    match inventory::modify_inventory_item(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Registro de inventario #{} actualizado.", record.id))
                .send();
        }
        Err(err) => flash_service_error(
            err,
            "update inventory item",
            "No se pudo actualizar el registro de inventario.",
        ),
    }
    redirect("/catalog/inventory")
}
