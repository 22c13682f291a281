use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::forms::product_reviews::{AddProductReviewForm, EditProductReviewForm};
use crate::repository::RestRepository;
use crate::routes::{base_context, flash_service_error, list_load_failed, redirect, render_template};
use crate::services::{PageQuery, product_reviews};

#[get("/product-reviews")]
pub async fn show_product_reviews(
    params: web::Query<PageQuery>,
    repo: web::Data<RestRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match product_reviews::load_product_reviews(repo.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "product-reviews");
            context.insert("page", &data);
            render_template(&tera, "commerce/product_reviews.html", &context)
        }
        Err(err) => list_load_failed(&tera, &flash_messages, "product-reviews", err),
    }
}

#[post("/product-reviews/add")]
pub async fn add_product_review(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<AddProductReviewForm>,
) -> impl Responder {
    match product_reviews::create_product_review(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Reseña #{} creada.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "create product review",
            "No se pudo crear la reseña.",
        ),
    }
    redirect("/product-reviews")
}

#[post("/product-reviews/edit")]
pub async fn edit_product_review(
    repo: web::Data<RestRepository>,
    web::Form(form): web::Form<EditProductReviewForm>,
) -> impl Responder {
    match product_reviews::modify_product_review(repo.get_ref(), form).await {
        Ok(record) => {
            FlashMessage::success(format!("Reseña #{} actualizada.", record.id)).send();
        }
        Err(err) => flash_service_error(
            err,
            "update product review",
            "No se pudo actualizar la reseña.",
        ),
    }
    redirect("/product-reviews")
}
