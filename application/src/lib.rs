#[cfg(any(
    feature = "adapters",
    feature = "axum",
    feature = "sqlx",
    feature = "image",
    feature = "reqwest"
))]
compile_error!("application must not depend on adapters/framework crates");

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod infrastructure_config;
pub mod media;
pub mod order;
pub mod ports;
