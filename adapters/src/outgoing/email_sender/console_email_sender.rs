use tracing::{info, instrument};

use super::templates::EmailTemplate;
use atelier_application::{error::AppResult, ports::outgoing::email_sender::EmailSenderPort};
use domain::order::OrderRequest;

/// Development sender: logs the order request instead of delivering it.
pub struct ConsoleEmailSender;

impl ConsoleEmailSender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmailSenderPort for ConsoleEmailSender {
    #[instrument(skip(self, order))]
    async fn send_order_request(
        &self,
        recipient_email: &str,
        order: &OrderRequest,
    ) -> AppResult<()> {
        let email_content = EmailTemplate::order_request_console(recipient_email, order);

        info!(
            recipient = recipient_email,
            piece = %order.art_piece_name,
            "📧 ORDER REQUEST (Console Email Sender)"
        );

        info!("{}", email_content);

        Ok(())
    }
}
