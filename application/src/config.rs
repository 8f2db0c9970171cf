/// Settings the media pipeline needs at runtime, resolved once from the
/// infrastructure config at startup.
#[derive(Debug, Clone)]
pub struct MediaSettings {
    pub palette_size: usize,
    pub max_upload_bytes: usize,
}

impl MediaSettings {
    #[must_use]
    pub fn new(palette_size: usize, max_upload_bytes: usize) -> Self {
        Self {
            palette_size: palette_size.clamp(1, 16),
            max_upload_bytes,
        }
    }
}
