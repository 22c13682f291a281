use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::users::{AddUserForm, EditUserForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, users};

#[get("/users")]
pub async fn show_users(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match users::load_users(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "users");
            context.insert("page", &data);
            render_template(&tera, "commerce/users.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "users", err),
    }
}

#[post("/users/add")]
pub async fn add_user(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddUserForm>,
) -> impl Responder {
    match users::create_user(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Usuario #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "create user", "No se pudo crear el usuario."),
    }
    redirect("/users")
}

#[post("/users/edit")]
pub async fn edit_user(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditUserForm>,
) -> impl Responder {
    match users::modify_user(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Usuario #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(err, "update user", "No se pudo actualizar el usuario."),
    }
    redirect("/users")
}
