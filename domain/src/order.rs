use crate::error::{DomainError, DomainResult};

/// Purchase inquiry submitted from a piece's order form. Delivered to
/// the artist by email; nothing is persisted.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub message: Option<String>,
    pub art_piece_name: String,
}

impl OrderRequest {
    pub fn validate(&self) -> DomainResult<()> {
        if self.customer_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "customer name is required".to_string(),
            ));
        }
        if self.customer_email.trim().is_empty() || !self.customer_email.contains('@') {
            return Err(DomainError::ValidationError(
                "a valid customer email is required".to_string(),
            ));
        }
        if self.art_piece_name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "art piece name is required".to_string(),
            ));
        }
        Ok(())
    }
}
