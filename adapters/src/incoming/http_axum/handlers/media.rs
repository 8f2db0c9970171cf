use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use uuid::Uuid;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ApiResponseValue;
use crate::incoming::http_axum::{
    dto::responses::{ApiResponse, UploadResponse},
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;
use atelier_application::error::AppError;
use domain::artwork::ArtPieceId;
use domain::color::palette_to_css;
use domain::crop::CropRegion;
use domain::mural::MuralId;

struct UploadedFile {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

#[derive(Debug, Default)]
struct CropFields {
    x: Option<u32>,
    y: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
}

impl CropFields {
    fn set(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        let parsed = value
            .trim()
            .parse()
            .map_err(|_| AppError::ValidationError {
                message: format!("crop field '{name}' must be a non-negative integer, got '{value}'"),
            })?;
        match name {
            "x" => self.x = Some(parsed),
            "y" => self.y = Some(parsed),
            "width" => self.width = Some(parsed),
            "height" => self.height = Some(parsed),
            _ => {}
        }
        Ok(())
    }

    /// Crop fields are optional as a whole; a region needs at least
    /// width and height, with x/y defaulting to the top-left corner.
    fn into_region(self) -> Result<Option<CropRegion>, AppError> {
        match (self.width, self.height) {
            (Some(width), Some(height)) => {
                let region =
                    CropRegion::new(self.x.unwrap_or(0), self.y.unwrap_or(0), width, height)?;
                Ok(Some(region))
            }
            (None, None) if self.x.is_none() && self.y.is_none() => Ok(None),
            _ => Err(AppError::ValidationError {
                message: "crop region requires both width and height".to_string(),
            }),
        }
    }
}

/// Pulls the first `file` part out of the multipart body.
async fn read_file_part(mut multipart: Multipart) -> Result<UploadedFile, HttpError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError {
            message: format!("malformed multipart body: {e}"),
        })?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::ValidationError {
                message: format!("failed to read upload: {e}"),
            })?
            .to_vec();

        return Ok(UploadedFile {
            file_name,
            content_type,
            bytes,
        });
    }

    Err(HttpError(AppError::ValidationError {
        message: "multipart body must contain a 'file' part".to_string(),
    }))
}

/// Like `read_file_part`, but also picks up the cropper's optional
/// `x`/`y`/`width`/`height` text parts.
async fn read_main_image_parts(
    mut multipart: Multipart,
) -> Result<(UploadedFile, Option<CropRegion>), HttpError> {
    let mut file = None;
    let mut crop = CropFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::ValidationError {
            message: format!("malformed multipart body: {e}"),
        })?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::ValidationError {
                        message: format!("failed to read upload: {e}"),
                    })?
                    .to_vec();
                file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "x" | "y" | "width" | "height" => {
                let value = field.text().await.map_err(|e| AppError::ValidationError {
                    message: format!("failed to read crop field '{name}': {e}"),
                })?;
                crop.set(&name, &value)?;
            }
            _ => {}
        }
    }

    let file = file.ok_or(HttpError(AppError::ValidationError {
        message: "multipart body must contain a 'file' part".to_string(),
    }))?;
    Ok((file, crop.into_region()?))
}

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/admin/art-pieces/{id}/main-image",
    params(("id" = Uuid, Path, description = "Piece id")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image cropped, stored and linked; palette extracted", body = ApiResponseValue),
        (status = 404, description = "Unknown piece", body = ApiResponseValue),
        (status = 422, description = "Missing file part or upload too large", body = ApiResponseValue)
    ),
    tag = "media",
    summary = "Upload the circular main image",
    description = "Multipart parts: `file` (required) plus the cropper's optional `x`/`y`/`width`/`height` region; without one the centered square is cropped"
))]
pub async fn upload_main_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, HttpError> {
    let (upload, region) = read_main_image_parts(multipart).await?;
    let prepared = state
        .media_service
        .upload_main_image(
            ArtPieceId::from_uuid(id),
            &upload.file_name,
            upload.bytes,
            region,
        )
        .await?;

    Ok(Json(ApiResponse::success_with_data(UploadResponse {
        url: prepared.public_url,
        palette: Some(palette_to_css(&prepared.palette)),
    })))
}

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/admin/art-pieces/{id}/images",
    params(("id" = Uuid, Path, description = "Piece id")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored and appended to the piece", body = ApiResponseValue),
        (status = 404, description = "Unknown piece", body = ApiResponseValue)
    ),
    tag = "media",
    summary = "Upload an additional gallery image"
))]
pub async fn upload_gallery_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, HttpError> {
    let upload = read_file_part(multipart).await?;
    let url = state
        .media_service
        .upload_gallery_image(
            ArtPieceId::from_uuid(id),
            &upload.file_name,
            &upload.content_type,
            upload.bytes,
        )
        .await?;

    Ok(Json(ApiResponse::success_with_data(UploadResponse {
        url,
        palette: None,
    })))
}

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/admin/murals/{id}/images",
    params(("id" = Uuid, Path, description = "Mural id")),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Image stored and appended to the mural", body = ApiResponseValue),
        (status = 404, description = "Unknown mural", body = ApiResponseValue)
    ),
    tag = "media",
    summary = "Upload a mural image"
))]
pub async fn upload_mural_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResponse>>, HttpError> {
    let upload = read_file_part(multipart).await?;
    let url = state
        .media_service
        .upload_mural_image(
            MuralId::from_uuid(id),
            &upload.file_name,
            &upload.content_type,
            upload.bytes,
        )
        .await?;

    Ok(Json(ApiResponse::success_with_data(UploadResponse {
        url,
        palette: None,
    })))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fields(
        x: Option<&str>,
        y: Option<&str>,
        width: Option<&str>,
        height: Option<&str>,
    ) -> Result<CropFields, AppError> {
        let mut crop = CropFields::default();
        for (name, value) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if let Some(value) = value {
                crop.set(name, value)?;
            }
        }
        Ok(crop)
    }

    #[test]
    fn absent_crop_fields_mean_no_region() {
        let region = fields(None, None, None, None).unwrap().into_region().unwrap();
        assert_eq!(region, None);
    }

    #[test]
    fn full_crop_fields_build_the_region() {
        let region = fields(Some("40"), Some("12"), Some("300"), Some("300"))
            .unwrap()
            .into_region()
            .unwrap();
        assert_eq!(region, Some(CropRegion::new(40, 12, 300, 300).unwrap()));
    }

    #[test]
    fn missing_x_and_y_default_to_the_origin() {
        let region = fields(None, None, Some("200"), Some("150"))
            .unwrap()
            .into_region()
            .unwrap();
        assert_eq!(region, Some(CropRegion::new(0, 0, 200, 150).unwrap()));
    }

    #[test]
    fn partial_region_is_rejected() {
        let err = fields(Some("10"), None, None, None)
            .unwrap()
            .into_region()
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));

        let err = fields(None, None, Some("200"), None)
            .unwrap()
            .into_region()
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
    }

    #[test]
    fn non_numeric_crop_field_is_rejected() {
        let err = fields(None, None, Some("wide"), Some("150")).unwrap_err();
        assert!(matches!(err, AppError::ValidationError { .. }));
    }

    #[test]
    fn zero_sized_region_is_rejected() {
        let err = fields(None, None, Some("0"), Some("100"))
            .unwrap()
            .into_region()
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(_)));
    }
}
