use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use axum_login::{AuthManagerLayer, AuthManagerLayerBuilder};
use tower_sessions::MemoryStore;
#[cfg(feature = "docs")]
use utoipa::OpenApi;
#[cfg(feature = "docs")]
use utoipa_swagger_ui::SwaggerUi;

use crate::incoming::http_axum::{
    auth::{
        backend::AuthBackend,
        session::{SessionConfig, create_session_layer},
    },
    handlers::{
        art_pieces::{
            create_art_piece, delete_art_piece, get_art_piece, list_art_pieces,
            remove_art_piece_image, reorder_art_piece_image, update_art_piece,
        },
        auth::{login_handler, logout_handler, me_handler},
        gallery::{get_piece_by_slug, list_public_gallery, list_sections},
        health::health_check,
        media::{upload_gallery_image, upload_main_image, upload_mural_image},
        murals::{
            create_mural, delete_mural, list_murals, remove_mural_image, reorder_mural_image,
            update_mural,
        },
        orders::submit_order,
        sections::upsert_section,
    },
    middleware::admin_auth::require_admin,
};
use crate::shared::app_state::AppState;
use atelier_application::ports::outgoing::password_hasher::DynPasswordHasherPort;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::docs::ApiDoc;

pub fn build_application_router(
    state: &AppState,
    password_hasher: DynPasswordHasherPort,
) -> Router<AppState> {
    let (auth_routes, auth_layer) = build_auth_routes(state, password_hasher);
    let public_routes = build_public_routes();
    let admin_routes = build_admin_routes_with_auth(auth_layer);

    public_routes.merge(auth_routes).merge(admin_routes)
}

fn build_public_routes() -> Router<AppState> {
    let router = Router::new()
        .route("/art-pieces", get(list_public_gallery))
        .route("/art-pieces/{slug}", get(get_piece_by_slug))
        .route("/sections", get(list_sections))
        .route("/murals", get(list_murals))
        .route("/order", post(submit_order))
        .route("/health", get(health_check));

    #[cfg(feature = "docs")]
    {
        router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }

    #[cfg(not(feature = "docs"))]
    {
        router
    }
}

fn build_admin_routes_with_auth(
    auth_layer: AuthManagerLayer<AuthBackend, MemoryStore>,
) -> Router<AppState> {
    Router::new()
        .route(
            "/admin/art-pieces",
            get(list_art_pieces).post(create_art_piece),
        )
        .route(
            "/admin/art-pieces/{id}",
            get(get_art_piece)
                .put(update_art_piece)
                .delete(delete_art_piece),
        )
        .route(
            "/admin/art-pieces/{id}/main-image",
            post(upload_main_image),
        )
        .route("/admin/art-pieces/{id}/images", post(upload_gallery_image))
        .route(
            "/admin/art-pieces/{id}/images/order",
            put(reorder_art_piece_image),
        )
        .route(
            "/admin/art-pieces/{id}/images/{index}",
            delete(remove_art_piece_image),
        )
        .route("/admin/murals", post(create_mural))
        .route(
            "/admin/murals/{id}",
            put(update_mural).delete(delete_mural),
        )
        .route("/admin/murals/{id}/images", post(upload_mural_image))
        .route("/admin/murals/{id}/images/order", put(reorder_mural_image))
        .route(
            "/admin/murals/{id}/images/{index}",
            delete(remove_mural_image),
        )
        .route("/admin/sections", put(upsert_section))
        .layer(middleware::from_fn(require_admin))
        .layer(auth_layer)
}

fn build_auth_routes(
    state: &AppState,
    password_hasher: DynPasswordHasherPort,
) -> (
    Router<AppState>,
    AuthManagerLayer<AuthBackend, MemoryStore>,
) {
    let same_site_policy = if state.config.auth.cookie_secure {
        "None".to_string()
    } else {
        "Lax".to_string()
    };

    let session_config = SessionConfig {
        cookie_name: state.config.auth.cookie_name.clone(),
        secure: state.config.auth.cookie_secure,
        same_site: same_site_policy,
    };
    let session_layer = create_session_layer(&session_config);

    let auth_backend = AuthBackend::new(Arc::new(state.config.auth.clone()), password_hasher);
    let auth_manager_layer = AuthManagerLayerBuilder::new(auth_backend, session_layer).build();

    let routes = Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/auth/me", get(me_handler))
        .layer(auth_manager_layer.clone());

    (routes, auth_manager_layer)
}
