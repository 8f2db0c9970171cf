use serde::{Deserialize, Serialize};
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use crate::error::{DomainError, DomainResult};

pub const RGBA_CHANNELS: usize = 4;

/// Rectangle in source-image pixel coordinates selected by the
/// interactive cropper UI.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> DomainResult<Self> {
        if width == 0 || height == 0 {
            return Err(DomainError::InvalidCropRegion(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Non-square regions are truncated to a square on the minimum
    /// dimension. Kept from the original avatar-style cropper.
    #[must_use]
    pub fn side(&self) -> u32 {
        self.width.min(self.height)
    }
}

/// Decoded raster image, tightly packed RGBA rows. Ephemeral: built
/// from one upload, consumed by the cropper or palette extractor,
/// dropped at the end of the operation.
#[derive(Debug)]
pub struct RgbaBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaBuffer {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> DomainResult<Self> {
        let expected = width as usize * height as usize * RGBA_CHANNELS;
        if pixels.len() != expected {
            return Err(DomainError::InvalidImageBuffer(format!(
                "expected {expected} bytes for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        let offset = (y * self.width as usize + x) * RGBA_CHANNELS;
        self.pixels.get(offset..offset + RGBA_CHANNELS)
    }
}

/// Crops `source` to the inscribed circle of the region's square:
/// output is side x side, pixels outside the circle (or outside the
/// source bounds) fully transparent.
pub fn circular_crop(source: &RgbaBuffer, region: &CropRegion) -> DomainResult<RgbaBuffer> {
    let side = region.side() as usize;
    let mut output = vec![0u8; side * side * RGBA_CHANNELS];

    let radius = side as f64 / 2.0;
    // pixel centers: the canvas arc is centered at side/2
    let center = radius - 0.5;

    for out_y in 0..side {
        for out_x in 0..side {
            let dx = out_x as f64 - center;
            let dy = out_y as f64 - center;
            if dx * dx + dy * dy > radius * radius {
                continue;
            }

            let src_x = region.x as usize + out_x;
            let src_y = region.y as usize + out_y;
            if src_x >= source.width as usize || src_y >= source.height as usize {
                continue;
            }

            let Some(src_pixel) = source.pixel(src_x, src_y) else {
                continue;
            };
            let offset = (out_y * side + out_x) * RGBA_CHANNELS;
            if let Some(dst_pixel) = output.get_mut(offset..offset + RGBA_CHANNELS) {
                dst_pixel.copy_from_slice(src_pixel);
            }
        }
    }

    RgbaBuffer::new(side as u32, side as u32, output)
}

/// Cropped output must carry alpha, so the name always gets a `.png`
/// extension regardless of the source format.
#[must_use]
pub fn png_file_name(original: &str) -> String {
    match original.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => format!("{stem}.png"),
        _ => format!("{original}.png"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn opaque_source(width: u32, height: u32) -> RgbaBuffer {
        let pixels = vec![255u8; width as usize * height as usize * RGBA_CHANNELS];
        RgbaBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn rejects_degenerate_regions() {
        assert!(CropRegion::new(0, 0, 0, 100).is_err());
        assert!(CropRegion::new(0, 0, 100, 0).is_err());
    }

    #[test]
    fn truncates_to_min_side() {
        let source = opaque_source(400, 400);
        let region = CropRegion::new(0, 0, 200, 150).unwrap();
        let cropped = circular_crop(&source, &region).unwrap();
        assert_eq!((cropped.width, cropped.height), (150, 150));
    }

    #[test]
    fn corners_transparent_center_opaque() {
        let source = opaque_source(100, 100);
        let region = CropRegion::new(0, 0, 100, 100).unwrap();
        let cropped = circular_crop(&source, &region).unwrap();

        let alpha = |x: usize, y: usize| cropped.pixel(x, y).unwrap()[3];
        assert_eq!(alpha(0, 0), 0);
        assert_eq!(alpha(99, 0), 0);
        assert_eq!(alpha(0, 99), 0);
        assert_eq!(alpha(99, 99), 0);
        assert_eq!(alpha(50, 50), 255);
        // circle touches the edge midpoints
        assert_eq!(alpha(50, 0), 255);
        assert_eq!(alpha(0, 50), 255);
    }

    #[test]
    fn out_of_bounds_region_is_transparent() {
        let source = opaque_source(60, 60);
        let region = CropRegion::new(40, 40, 50, 50).unwrap();
        let cropped = circular_crop(&source, &region).unwrap();
        assert_eq!((cropped.width, cropped.height), (50, 50));
        // center maps to (65, 65) in the source, past its 60x60 bounds
        assert_eq!(cropped.pixel(25, 25).unwrap()[3], 0);
        // top-left quarter still inside the source and the circle
        assert_eq!(cropped.pixel(10, 10).unwrap()[3], 255);
    }

    #[test]
    fn forces_png_extension() {
        assert_eq!(png_file_name("photo.JPG"), "photo.png");
        assert_eq!(png_file_name("mynd.jpeg"), "mynd.png");
        assert_eq!(png_file_name("already.png"), "already.png");
        assert_eq!(png_file_name("noextension"), "noextension.png");
        assert_eq!(png_file_name(".hidden"), ".hidden.png");
    }
}
