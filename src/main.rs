use std::time::Duration;

use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use dotenvy::dotenv;
use tera::Tera;

use backoffice_admin::config::ServerConfig;
use backoffice_admin::repository::RestRepository;
use backoffice_admin::routes::api::proxy_api;
use backoffice_admin::routes::auth::{login, show_login};
use backoffice_admin::routes::cart_details::{add_cart_detail, edit_cart_detail, show_cart_details};
use backoffice_admin::routes::carts::{add_cart, edit_cart, show_carts};
use backoffice_admin::routes::catalog::show_catalog;
use backoffice_admin::routes::customers::{
    add_customer, deactivate_customer, edit_customer, show_customers,
};
use backoffice_admin::routes::dashboard::show_dashboard;
use backoffice_admin::routes::inventory::{
    add_inventory_item, edit_inventory_item, show_inventory_items,
};
use backoffice_admin::routes::invoice_details::{
    add_invoice_detail, edit_invoice_detail, show_invoice_details,
};
use backoffice_admin::routes::invoices::{add_invoice, edit_invoice, show_invoices};
use backoffice_admin::routes::login_security::{
    add_login_record, edit_login_record, show_login_records,
};
use backoffice_admin::routes::order_details::{
    add_order_detail, edit_order_detail, show_order_details,
};
use backoffice_admin::routes::order_history::{
    add_purchase_record, edit_purchase_record, show_purchase_records,
};
use backoffice_admin::routes::orders::{add_order, change_order_stage, edit_order, show_orders};
use backoffice_admin::routes::payment_methods::{
    add_payment_method, edit_payment_method, show_payment_methods,
};
use backoffice_admin::routes::product_purchases::{
    add_product_purchase, edit_product_purchase, show_product_purchases,
};
use backoffice_admin::routes::product_reviews::{
    add_product_review, edit_product_review, show_product_reviews,
};
use backoffice_admin::routes::products::{add_product, edit_product, show_products};
use backoffice_admin::routes::promotion_products::{
    add_promotion_product, edit_promotion_product, show_promotion_products,
};
use backoffice_admin::routes::promotions::{add_promotion, edit_promotion, show_promotions};
use backoffice_admin::routes::roles::{add_role, edit_role, show_roles};
use backoffice_admin::routes::suppliers::{add_supplier, edit_supplier, show_suppliers};
use backoffice_admin::routes::surfaces::{
    add_surface_category, edit_surface_category, show_surface_categories,
};
use backoffice_admin::routes::users::{add_user, edit_user, show_users};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let secret_key = match &config.secret {
        Some(key) if key.len() >= 64 => Key::from(key.as_bytes()),
        Some(_) => {
            log::warn!("SECRET_KEY shorter than 64 bytes, using a random key");
            Key::generate()
        }
        None => Key::generate(),
    };

    let repo = match RestRepository::connect(
        &config.api_url,
        &config.catalog_api_url,
        Duration::from_secs(config.request_timeout_secs),
    ) {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("Failed to build the backend client: {e}");
            std::process::exit(1);
        }
    };

    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = match Tera::new(&format!("{}/**/*", config.templates_dir)) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Serving back office on {}:{} (commerce: {}, catalog: {})",
        config.address,
        config.port,
        config.api_url,
        config.catalog_api_url
    );

    let address = config.address.clone();
    let port = config.port;

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(proxy_api)
            .service(show_dashboard)
            .service(show_catalog)
            .service(show_login)
            .service(login)
            .service(show_customers)
            .service(add_customer)
            .service(edit_customer)
            .service(deactivate_customer)
            .service(show_carts)
            .service(add_cart)
            .service(edit_cart)
            .service(show_cart_details)
            .service(add_cart_detail)
            .service(edit_cart_detail)
            .service(show_orders)
            .service(add_order)
            .service(edit_order)
            .service(change_order_stage)
            .service(show_order_details)
            .service(add_order_detail)
            .service(edit_order_detail)
            .service(show_purchase_records)
            .service(add_purchase_record)
            .service(edit_purchase_record)
            .service(show_payment_methods)
            .service(add_payment_method)
            .service(edit_payment_method)
            .service(show_product_reviews)
            .service(add_product_review)
            .service(edit_product_review)
            .service(show_roles)
            .service(add_role)
            .service(edit_role)
            .service(show_users)
            .service(add_user)
            .service(edit_user)
            .service(show_login_records)
            .service(add_login_record)
            .service(edit_login_record)
            .service(show_invoices)
            .service(add_invoice)
            .service(edit_invoice)
            .service(show_invoice_details)
            .service(add_invoice_detail)
            .service(edit_invoice_detail)
            .service(show_inventory_items)
            .service(add_inventory_item)
            .service(edit_inventory_item)
            .service(show_products)
            .service(add_product)
            .service(edit_product)
            .service(show_promotions)
            .service(add_promotion)
            .service(edit_promotion)
            .service(show_promotion_products)
            .service(add_promotion_product)
            .service(edit_promotion_product)
            .service(show_suppliers)
            .service(add_supplier)
            .service(edit_supplier)
            .service(show_product_purchases)
            .service(add_product_purchase)
            .service(edit_product_purchase)
            .service(show_surface_categories)
            .service(add_surface_category)
            .service(edit_surface_category)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
