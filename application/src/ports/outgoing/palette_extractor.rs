use std::sync::Arc;

use domain::color::Palette;

/// Derives the dominant colors of an encoded image. Extraction is
/// best-effort; undecodable input yields an empty palette rather than
/// an error so uploads never fail on palette problems.
pub trait PaletteExtractorPort: Send + Sync {
    fn extract_palette(&self, image_data: &[u8], color_count: usize) -> Palette;
}

pub type DynPaletteExtractorPort = Arc<dyn PaletteExtractorPort>;
