pub mod config;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod services;

/// Display name rendered in the page title and the sidebar header.
pub const APP_NAME: &str = "Back Office";
