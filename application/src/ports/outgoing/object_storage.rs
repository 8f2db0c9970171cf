use std::sync::Arc;

use crate::error::AppResult;

/// Remote object storage for uploaded media. Keys are the
/// bucket-relative paths produced by the media service; `upload`
/// overwrites any existing object under the same key and returns the
/// public URL serving it.
#[async_trait::async_trait]
pub trait ObjectStoragePort: Send + Sync {
    async fn upload(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> AppResult<String>;
    async fn delete(&self, key: &str) -> AppResult<()>;
    fn public_url(&self, key: &str) -> String;
}

pub type DynObjectStoragePort = Arc<dyn ObjectStoragePort>;
