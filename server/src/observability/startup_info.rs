use atelier_application::infrastructure_config::{Config, MediaConfig, StorageConfig};
use tracing::info;

pub fn print_api_info(config: &Config) {
    print_api_documentation_info(config);
    print_configuration_info(config);
}

fn print_api_documentation_info(config: &Config) {
    let base_url = format!("http://{}", config.server_address());
    info!("📋 API Documentation:");
    info!("  📖 Swagger UI: {}/docs", base_url);
    info!("  📄 OpenAPI JSON: {}/api-docs/openapi.json", base_url);
}

fn print_configuration_info(config: &Config) {
    info!("⚙️  Configuration:");
    print_media_configuration(&config.media);
    print_storage_configuration(&config.storage);
    print_email_configuration(config);
    info!("  🗄️  Database: PostgreSQL with connection pooling");
    info!("  🌍 Environment: {}", config.environment.env);
}

fn print_media_configuration(media: &MediaConfig) {
    info!(
        "  🎨 Media: {} palette colors, {} MiB upload limit",
        media.palette_size,
        media.max_upload_bytes / (1024 * 1024)
    );
}

fn print_storage_configuration(storage: &StorageConfig) {
    info!(
        "  📦 Object storage: bucket '{}' at {}",
        storage.bucket, storage.base_url
    );
}

fn print_email_configuration(config: &Config) {
    info!(
        "  ✉️  Order emails: {:?} backend, recipient {}",
        config.auth.email.email_backend, config.auth.order_recipient
    );
}
