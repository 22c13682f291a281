use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::roles::{AddRoleForm, EditRoleForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, roles};

#[get("/roles")]
pub async fn show_roles(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match roles::load_roles(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "roles");
            context.insert("page", &data);
            render_template(&tera, "commerce/roles.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "roles", err),
    }
}

#[post("/roles/add")]
pub async fn add_role(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddRoleForm>,
) -> impl Responder {
    match roles::create_role(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Rol #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "create role", "No se pudo crear el rol."),
    }
    redirect("/roles")
}

#[post("/roles/edit")]
pub async fn edit_role(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditRoleForm>,
) -> impl Responder {
    match roles::modify_role(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Rol #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "update role", "No se pudo actualizar el rol."),
    }
    redirect("/roles")
}
