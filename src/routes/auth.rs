use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::auth::LoginForm;
use crate::repository::RestRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, auth};

#[get("/auth")]
pub async fn show_login(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let context = base_context(&flash_messages, "auth");
    render_template(&tera, "auth.html", &context)
}

#[post("/auth")]
pub async fn login(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<LoginForm>,
) -> impl Responder {
    match auth::login(repo.get_ref(), form).await {
        Ok(()) => {
            FlashMessage::success("Login exitoso. ¡Bienvenido de nuevo!").send();
            redirect("/")
        }
        Err(ServiceError::Unauthorized) => {
            FlashMessage::error("Correo o contraseña incorrectos.").send();
            redirect("/auth")
        }
        Err(ServiceError::Form(_)) => {
            FlashMessage::error("Introduce un correo válido y la contraseña.").send();
            redirect("/auth")
        }
        Err(ServiceError::Backend(message)) => {
            FlashMessage::error(message).send();
            redirect("/auth")
        }
        Err(err) => {
            log::error!("Failed to log in: {err}");
            FlashMessage::error("No se pudo iniciar sesión.").send();
            redirect("/auth")
        }
    }
}
