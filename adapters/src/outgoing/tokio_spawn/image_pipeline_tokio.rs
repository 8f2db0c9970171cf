use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::task::spawn_blocking;

use atelier_application::error::AppError;
use atelier_application::ports::outgoing::{
    blocking_task::{BlockingTaskError, ImagePipelinePort},
    image_codec::DynImageCodecPort,
    palette_extractor::DynPaletteExtractorPort,
};
use domain::color::Palette;
use domain::crop::{CropRegion, RgbaBuffer, circular_crop};

/// Runs decode, crop and k-means on the blocking pool. Both operations
/// are CPU-bound for multi-megabyte uploads.
pub struct TokioImagePipelineAdapter {
    codec_port: DynImageCodecPort,
    palette_port: DynPaletteExtractorPort,
}

impl TokioImagePipelineAdapter {
    pub fn new(codec_port: DynImageCodecPort, palette_port: DynPaletteExtractorPort) -> Self {
        Self {
            codec_port,
            palette_port,
        }
    }
}

fn centered_square(buffer: &RgbaBuffer) -> Result<CropRegion, BlockingTaskError> {
    let side = buffer.width.min(buffer.height);
    CropRegion::new(
        (buffer.width - side) / 2,
        (buffer.height - side) / 2,
        side,
        side,
    )
    .map_err(|e| BlockingTaskError {
        message: e.to_string(),
    })
}

fn task_failed(message: String) -> BlockingTaskError {
    BlockingTaskError { message }
}

impl ImagePipelinePort for TokioImagePipelineAdapter {
    fn crop_to_circle_png(
        &self,
        image_data: Vec<u8>,
        region: Option<CropRegion>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, BlockingTaskError>> + Send + 'static>> {
        let codec = Arc::clone(&self.codec_port);

        Box::pin(async move {
            let task = spawn_blocking(move || -> Result<Vec<u8>, AppError> {
                let decoded = codec.decode_to_rgba(&image_data)?;
                let region = match region {
                    Some(region) => region,
                    None => centered_square(&decoded).map_err(|e| AppError::CodecError {
                        message: e.message,
                    })?,
                };
                let cropped = circular_crop(&decoded, &region)?;
                codec.encode_png(&cropped)
            });

            task.await
                .map_err(|e| task_failed(format!("crop task panicked: {e}")))?
                .map_err(|e| task_failed(e.to_string()))
        })
    }

    fn extract_palette(
        &self,
        image_data: Vec<u8>,
        color_count: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Palette, BlockingTaskError>> + Send + 'static>> {
        let extractor = Arc::clone(&self.palette_port);

        Box::pin(async move {
            let task = spawn_blocking(move || extractor.extract_palette(&image_data, color_count));

            task.await
                .map_err(|e| task_failed(format!("palette task panicked: {e}")))
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::outgoing::image_rs::png_codec_image::ImagePngAdapter;
    use crate::outgoing::palette_kmeans::kmeans_extractor::KmeansPaletteExtractor;

    fn pipeline() -> TokioImagePipelineAdapter {
        TokioImagePipelineAdapter::new(
            Arc::new(ImagePngAdapter::new()),
            Arc::new(KmeansPaletteExtractor::new()),
        )
    }

    fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let pixels: Vec<u8> = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        let buffer = RgbaBuffer::new(width, height, pixels).unwrap();
        ImagePngAdapter::new().encode_png(&buffer).unwrap()
    }

    use atelier_application::ports::outgoing::image_codec::ImageCodecPort;

    #[tokio::test]
    async fn crops_landscape_to_square_circle() {
        let input = solid_png(120, 80, [10, 200, 30, 255]);
        let png = pipeline().crop_to_circle_png(input, None).await.unwrap();

        let decoded = ImagePngAdapter::new().decode_to_rgba(&png).unwrap();
        assert_eq!((decoded.width, decoded.height), (80, 80));
        // corners fall outside the inscribed circle
        assert_eq!(decoded.pixels.get(3).copied(), Some(0));
    }

    #[tokio::test]
    async fn honors_an_off_center_crop_region() {
        // left half red, right half blue
        let width = 120u32;
        let height = 80u32;
        let pixels: Vec<u8> = (0..height)
            .flat_map(|_| (0..width))
            .flat_map(|x| {
                if x < width / 2 {
                    [255, 0, 0, 255]
                } else {
                    [0, 0, 255, 255]
                }
            })
            .collect();
        let buffer = RgbaBuffer::new(width, height, pixels).unwrap();
        let input = ImagePngAdapter::new().encode_png(&buffer).unwrap();

        let region = CropRegion::new(60, 10, 60, 60).unwrap();
        let png = pipeline()
            .crop_to_circle_png(input, Some(region))
            .await
            .unwrap();

        let decoded = ImagePngAdapter::new().decode_to_rgba(&png).unwrap();
        assert_eq!((decoded.width, decoded.height), (60, 60));
        // region covers the blue half only
        let center = (30 * 60 + 30) * 4;
        assert_eq!(
            decoded.pixels.get(center..center + 4),
            Some(&[0u8, 0, 255, 255][..])
        );
    }

    #[tokio::test]
    async fn rejects_undecodable_input() {
        let result = pipeline().crop_to_circle_png(vec![1, 2, 3], None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn palette_of_solid_image_is_that_color() {
        let input = solid_png(64, 64, [200, 10, 10, 255]);
        let palette = pipeline().extract_palette(input, 3).await.unwrap();
        let first = palette.first().unwrap();
        assert!(first.r > 150 && first.g < 60 && first.b < 60);
    }
}
