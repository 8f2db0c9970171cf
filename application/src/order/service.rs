use tracing::info;

use crate::error::AppResult;
use crate::ports::incoming::orders::OrderUseCase;
use crate::ports::outgoing::email_sender::DynEmailSenderPort;
use domain::order::OrderRequest;

/// Forwards purchase inquiries to the artist's inbox. Orders are not
/// persisted; email is the system of record.
pub struct OrderService {
    email_sender: DynEmailSenderPort,
    recipient: String,
}

impl OrderService {
    #[must_use]
    pub fn new(email_sender: DynEmailSenderPort, recipient: String) -> Self {
        Self {
            email_sender,
            recipient,
        }
    }
}

#[async_trait::async_trait]
impl OrderUseCase for OrderService {
    async fn submit_order_request(&self, order: OrderRequest) -> AppResult<()> {
        order.validate()?;
        self.email_sender
            .send_order_request(&self.recipient, &order)
            .await?;
        info!(piece = %order.art_piece_name, "forwarded order request");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::ports::outgoing::email_sender::EmailSenderPort;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait::async_trait]
    impl EmailSenderPort for RecordingSender {
        async fn send_order_request(
            &self,
            recipient_email: &str,
            order: &OrderRequest,
        ) -> AppResult<()> {
            self.sent
                .lock()
                .unwrap()
                .push((recipient_email.to_string(), order.art_piece_name.clone()));
            Ok(())
        }
    }

    fn order() -> OrderRequest {
        OrderRequest {
            customer_name: "Anna".to_string(),
            customer_email: "anna@example.com".to_string(),
            message: Some("Is this still for sale?".to_string()),
            art_piece_name: "Harbor Dusk".to_string(),
        }
    }

    #[tokio::test]
    async fn valid_order_reaches_the_configured_recipient() {
        let sender = Arc::new(RecordingSender::default());
        let service = OrderService::new(sender.clone(), "artist@example.com".to_string());

        service.submit_order_request(order()).await.unwrap();

        let sent = sender.sent.lock().unwrap().clone();
        assert_eq!(
            sent,
            [("artist@example.com".to_string(), "Harbor Dusk".to_string())]
        );
    }

    #[tokio::test]
    async fn invalid_order_never_sends() {
        let sender = Arc::new(RecordingSender::default());
        let service = OrderService::new(sender.clone(), "artist@example.com".to_string());

        let mut bad = order();
        bad.customer_email = "nope".to_string();
        let err = service.submit_order_request(bad).await.unwrap_err();

        assert!(matches!(err, AppError::Domain(_)));
        assert!(sender.sent.lock().unwrap().is_empty());
    }
}
