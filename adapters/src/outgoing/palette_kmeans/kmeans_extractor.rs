use image::imageops::FilterType;
use kmeans_colors::get_kmeans;
use palette::{IntoColor, Lab, Srgb};
use tracing::{debug, instrument};

use atelier_application::ports::outgoing::palette_extractor::PaletteExtractorPort;
use domain::color::{Palette, RgbColor};

/// Pixels are clustered in Lab space so perceptually similar shades
/// merge into one dominant color.
const MAX_ITERATIONS: usize = 20;
const CONVERGENCE: f32 = 1e-4;
/// Uploads are large; clustering a thumbnail gives the same palette.
const SAMPLE_EDGE: u32 = 128;

#[derive(Clone, Default)]
pub struct KmeansPaletteExtractor;

impl KmeansPaletteExtractor {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self, image_data))]
    fn extract_impl(&self, image_data: &[u8], color_count: usize) -> Palette {
        let Ok(img) = image::load_from_memory(image_data) else {
            debug!("Palette extraction skipped: input is not a decodable image");
            return Vec::new();
        };

        let sample = img
            .resize(SAMPLE_EDGE, SAMPLE_EDGE, FilterType::Triangle)
            .to_rgba8();

        let lab_pixels: Vec<Lab> = sample
            .pixels()
            .filter(|pixel| pixel.0[3] > 0)
            .map(|pixel| {
                let srgb = Srgb::<u8>::new(pixel.0[0], pixel.0[1], pixel.0[2]);
                srgb.into_linear().into_color()
            })
            .collect();

        if lab_pixels.is_empty() || color_count == 0 {
            return Vec::new();
        }

        let k = color_count.min(lab_pixels.len());
        let kmeans = get_kmeans(k, MAX_ITERATIONS, CONVERGENCE, false, &lab_pixels, 0);

        // rank centroids by cluster population
        let mut counts = vec![0usize; kmeans.centroids.len()];
        for &index in &kmeans.indices {
            if let Some(count) = counts.get_mut(index as usize) {
                *count += 1;
            }
        }

        let mut ranked: Vec<(usize, &Lab)> = kmeans
            .centroids
            .iter()
            .enumerate()
            .map(|(index, centroid)| (counts.get(index).copied().unwrap_or(0), centroid))
            .collect();
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        let palette: Palette = ranked
            .into_iter()
            .map(|(_, &lab)| {
                let rgb_f32: Srgb<f32> = Srgb::from_linear(lab.into_color());
                let rgb = rgb_f32.into_format::<u8>();
                RgbColor::new(rgb.red, rgb.green, rgb.blue)
            })
            .collect();

        debug!(colors = palette.len(), "Extracted palette");
        palette
    }
}

impl PaletteExtractorPort for KmeansPaletteExtractor {
    fn extract_palette(&self, image_data: &[u8], color_count: usize) -> Palette {
        self.extract_impl(image_data, color_count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_of_color(r: u8, g: u8, b: u8) -> Vec<u8> {
        let img = RgbaImage::from_pixel(16, 16, Rgba([r, g, b, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn undecodable_input_yields_empty_palette() {
        let extractor = KmeansPaletteExtractor::new();
        assert!(extractor.extract_palette(b"not an image", 5).is_empty());
        assert!(extractor.extract_palette(&[], 5).is_empty());
    }

    #[test]
    fn solid_color_dominates() {
        let extractor = KmeansPaletteExtractor::new();
        let palette = extractor.extract_palette(&png_of_color(200, 10, 10), 3);

        assert!(!palette.is_empty());
        let first = palette[0];
        assert!(first.r > 150, "expected red-dominant, got {first:?}");
        assert!(first.g < 80 && first.b < 80, "got {first:?}");
    }

    #[test]
    fn zero_colors_requested_yields_empty() {
        let extractor = KmeansPaletteExtractor::new();
        assert!(extractor.extract_palette(&png_of_color(0, 0, 0), 0).is_empty());
    }
}
