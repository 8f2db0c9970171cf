use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgba};
use tracing::{debug, instrument};

use atelier_application::{
    error::{AppError, AppResult},
    ports::outgoing::image_codec::ImageCodecPort,
};
use domain::crop::RgbaBuffer;

/// Decodes whatever format the browser uploaded (PNG, JPEG, WebP) and
/// always encodes PNG, since cropped output needs an alpha channel.
#[derive(Clone, Default)]
pub struct ImagePngAdapter;

impl ImagePngAdapter {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, image_data))]
    fn decode_impl(&self, image_data: &[u8]) -> AppResult<RgbaBuffer> {
        let img = image::load_from_memory(image_data).map_err(|e| AppError::CodecError {
            message: format!("Failed to decode image: {e}"),
        })?;

        let rgba_img = img.to_rgba8();
        let (width, height) = rgba_img.dimensions();

        debug!(
            "Decoded image: {} bytes -> {}x{} RGBA",
            image_data.len(),
            width,
            height
        );

        Ok(RgbaBuffer::new(width, height, rgba_img.into_raw())?)
    }

    #[instrument(skip(self, buffer))]
    fn encode_impl(&self, buffer: &RgbaBuffer) -> AppResult<Vec<u8>> {
        let img_buffer = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            buffer.width,
            buffer.height,
            buffer.pixels.clone(),
        )
        .ok_or_else(|| AppError::CodecError {
            message: "Failed to create image buffer from RGBA data".to_string(),
        })?;

        let mut png_bytes = Vec::new();
        let mut cursor = Cursor::new(&mut png_bytes);

        img_buffer
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| AppError::CodecError {
                message: format!("Failed to encode PNG: {e}"),
            })?;

        debug!("Encoded PNG: {} bytes", png_bytes.len());

        if png_bytes.is_empty() {
            return Err(AppError::CodecError {
                message: "PNG encoding produced empty output".to_string(),
            });
        }

        Ok(png_bytes)
    }
}

impl ImageCodecPort for ImagePngAdapter {
    fn decode_to_rgba(&self, image_data: &[u8]) -> AppResult<RgbaBuffer> {
        self.decode_impl(image_data)
    }

    fn encode_png(&self, buffer: &RgbaBuffer) -> AppResult<Vec<u8>> {
        self.encode_impl(buffer)
    }
}
