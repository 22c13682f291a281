use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::surfaces::{AddSurfaceCategoryForm, EditSurfaceCategoryForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, surfaces};

#[get("/catalog/surfaces")]
pub async fn show_surface_categories(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match surfaces::load_surface_categories(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "catalog/surfaces");
            context.insert("page", &data);
            render_template(&tera, "catalog/surfaces.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "catalog/surfaces", err),
    }
}

#[post("/catalog/surfaces/add")]
pub async fn add_surface_category(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddSurfaceCategoryForm>,
) -> impl Responder {
    match surfaces::create_surface_category(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Categoría de superficie #{} creada.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create surface category",
            "No se pudo crear la categoría de superficie.",
        ),
    }
    redirect("/catalog/surfaces")
}

#[post("/catalog/surfaces/edit")]
pub async fn edit_surface_category(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditSurfaceCategoryForm>,
) -> impl Responder {
    match surfaces::modify_surface_category(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Categoría de superficie #{} actualizada.", record.id))
                .send();
        }
        Err(err) => flash_service_error(
            err,
            "update surface category",
            "No se pudo actualizar la categoría de superficie.",
        ),
    }
    redirect("/catalog/surfaces")
}
