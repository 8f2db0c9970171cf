use tower_sessions::{MemoryStore, SessionManagerLayer, cookie::SameSite};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,
    pub same_site: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "atelier_session".to_string(),
            secure: false,
            same_site: "Lax".to_string(),
        }
    }
}

/// In-process session store. Sessions do not survive a restart, which
/// is acceptable for a single-admin deployment.
pub fn create_session_layer(session_config: &SessionConfig) -> SessionManagerLayer<MemoryStore> {
    let session_store = MemoryStore::default();

    let same_site = match session_config.same_site.to_lowercase().as_str() {
        "strict" => SameSite::Strict,
        "none" => SameSite::None,
        _ => SameSite::Lax,
    };

    SessionManagerLayer::new(session_store)
        .with_name(session_config.cookie_name.clone())
        .with_same_site(same_site)
        .with_secure(session_config.secure)
        .with_http_only(true)
}
