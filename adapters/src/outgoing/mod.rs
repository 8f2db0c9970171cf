pub mod email_sender;
pub mod http_storage;
pub mod image_rs;
pub mod palette_kmeans;
pub mod passwords;
pub mod postgres_sqlx;
pub mod tokio_spawn;
