use std::sync::Arc;

use crate::error::AppResult;
use domain::order::OrderRequest;

#[async_trait::async_trait]
pub trait EmailSenderPort: Send + Sync {
    async fn send_order_request(&self, recipient_email: &str, order: &OrderRequest)
        -> AppResult<()>;
}

pub type DynEmailSenderPort = Arc<dyn EmailSenderPort>;
