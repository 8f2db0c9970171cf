use crate::incoming::http_axum::{dto, handlers};
use domain::artwork::ArtworkStatus;
use domain::color::RgbColor;
use dto::requests::{
    ArtPieceUpsertRequest, LoginRequest, MoveImageRequest, MuralUpsertRequest, OrderRequestBody,
    SectionUpsertRequest,
};
use dto::responses::{
    ApiResponseValue, ArtPieceResponse, AuthUserResponse, MuralResponse, SectionResponse,
    UploadResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::gallery::list_public_gallery,
        handlers::gallery::get_piece_by_slug,
        handlers::gallery::list_sections,
        handlers::murals::list_murals,
        handlers::orders::submit_order,
        handlers::health::health_check,
        handlers::auth::login_handler,
        handlers::auth::logout_handler,
        handlers::auth::me_handler,
        handlers::art_pieces::list_art_pieces,
        handlers::art_pieces::create_art_piece,
        handlers::art_pieces::get_art_piece,
        handlers::art_pieces::update_art_piece,
        handlers::art_pieces::delete_art_piece,
        handlers::art_pieces::reorder_art_piece_image,
        handlers::art_pieces::remove_art_piece_image,
        handlers::murals::create_mural,
        handlers::murals::update_mural,
        handlers::murals::delete_mural,
        handlers::murals::reorder_mural_image,
        handlers::murals::remove_mural_image,
        handlers::sections::upsert_section,
        handlers::media::upload_main_image,
        handlers::media::upload_gallery_image,
        handlers::media::upload_mural_image,
    ),
    components(
        schemas(
            ApiResponseValue,
            ArtPieceResponse,
            ArtPieceUpsertRequest,
            ArtworkStatus,
            AuthUserResponse,
            LoginRequest,
            MoveImageRequest,
            MuralResponse,
            MuralUpsertRequest,
            OrderRequestBody,
            RgbColor,
            SectionResponse,
            SectionUpsertRequest,
            UploadResponse,
        )
    ),
    tags(
        (name = "gallery", description = "Public portfolio reads"),
        (name = "catalog", description = "Admin catalog management"),
        (name = "murals", description = "Murals and location-based work"),
        (name = "sections", description = "Editable site sections"),
        (name = "media", description = "Image uploads and processing"),
        (name = "orders", description = "Purchase inquiries"),
        (name = "auth", description = "Admin session management"),
        (name = "system", description = "Operational endpoints")
    ),
    info(
        title = "Atelier API",
        description = "Content-managed artist portfolio backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
