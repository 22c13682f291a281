use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::login_security::{AddLoginRecordForm, EditLoginRecordForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, login_security};

#[get("/login-security")]
pub async fn show_login_records(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match login_security::load_login_records(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "login-security");
            context.insert("page", &data);
            render_template(&tera, "commerce/login_security.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "login-security", err),
    }
}

#[post("/login-security/add")]
pub async fn add_login_record(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddLoginRecordForm>,
) -> impl Responder {
    match login_security::create_login_record(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Registro de acceso #{} creado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create login record",
            "No se pudo crear el registro de acceso.",
        ),
    }
    redirect("/login-security")
}

#[post("/login-security/edit")]
pub async fn edit_login_record(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditLoginRecordForm>,
) -> impl Responder {
    match login_security::modify_login_record(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Registro de acceso #{} actualizado.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update login record",
            "No se pudo actualizar el registro de acceso.",
        ),
    }
    redirect("/login-security")
}
