use std::sync::Arc;

use crate::error::AppResult;
use domain::crop::RgbaBuffer;

pub trait ImageCodecPort: Send + Sync {
    fn decode_to_rgba(&self, image_data: &[u8]) -> AppResult<RgbaBuffer>;
    fn encode_png(&self, buffer: &RgbaBuffer) -> AppResult<Vec<u8>>;
}

pub type DynImageCodecPort = Arc<dyn ImageCodecPort>;
