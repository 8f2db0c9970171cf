use crate::error::AppResult;
use domain::order::OrderRequest;

#[async_trait::async_trait]
pub trait OrderUseCase: Send + Sync {
    async fn submit_order_request(&self, order: OrderRequest) -> AppResult<()>;
}
