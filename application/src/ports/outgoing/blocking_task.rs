use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use domain::color::Palette;
use domain::crop::CropRegion;

#[derive(Debug)]
pub struct BlockingTaskError {
    pub message: String,
}

/// CPU-bound image work routed through the runtime's blocking pool so
/// decode and k-means never stall request handlers.
pub trait ImagePipelinePort: Send + Sync {
    /// `region` is the admin's drag-selected rectangle; without one the
    /// crop defaults to the centered square of the decoded image.
    fn crop_to_circle_png(
        &self,
        image_data: Vec<u8>,
        region: Option<CropRegion>,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>, BlockingTaskError>> + Send + 'static>>;

    fn extract_palette(
        &self,
        image_data: Vec<u8>,
        color_count: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Palette, BlockingTaskError>> + Send + 'static>>;
}

pub type DynImagePipelinePort = Arc<dyn ImagePipelinePort>;
