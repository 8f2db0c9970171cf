use std::str::FromStr;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::{authentication::Credentials, client::Tls},
};
use secrecy::ExposeSecret;
use tracing::{error, info, instrument};

use super::templates::EmailTemplate;
use atelier_application::{
    error::{AppError, AppResult},
    infrastructure_config::SmtpConfig,
    ports::outgoing::email_sender::EmailSenderPort,
};
use domain::order::OrderRequest;

#[derive(Clone)]
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_email: String,
    from_name: String,
}

impl SmtpEmailSender {
    pub fn new(config: &SmtpConfig) -> Result<Self, AppError> {
        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port);

        if !config.username.is_empty() && !config.password.expose_secret().is_empty() {
            let creds = Credentials::new(
                config.username.clone(),
                config.password.expose_secret().to_string(),
            );
            transport_builder = transport_builder.credentials(creds);
        }

        let transport = if config.use_tls {
            transport_builder.build()
        } else {
            transport_builder.tls(Tls::None).build()
        };

        info!(
            smtp_host = %config.host,
            smtp_port = config.port,
            from_email = %config.from_email,
            use_tls = config.use_tls,
            "SMTP email sender initialized"
        );

        Ok(Self {
            transport,
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        })
    }
}

#[async_trait::async_trait]
impl EmailSenderPort for SmtpEmailSender {
    #[instrument(skip(self, order))]
    async fn send_order_request(
        &self,
        recipient_email: &str,
        order: &OrderRequest,
    ) -> AppResult<()> {
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", self.from_name, self.from_email))
            .map_err(|e| AppError::ExternalServiceError {
                message: format!("Invalid from email address: {e}"),
            })?;

        let to_mailbox =
            Mailbox::from_str(recipient_email).map_err(|e| AppError::ExternalServiceError {
                message: format!("Invalid recipient email address: {e}"),
            })?;

        let reply_to = Mailbox::from_str(&order.customer_email).ok();

        let email_body = EmailTemplate::order_request_html(order);

        let mut builder = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(EmailTemplate::order_request_subject(order))
            .header(ContentType::TEXT_HTML);

        if let Some(reply_to) = reply_to {
            builder = builder.reply_to(reply_to);
        }

        let email = builder
            .body(email_body)
            .map_err(|e| AppError::ExternalServiceError {
                message: format!("Failed to build email message: {e}"),
            })?;

        self.transport.send(email).await.map_err(|e| {
            error!(
                error = %e,
                recipient = recipient_email,
                "Failed to send order request email"
            );
            AppError::ExternalServiceError {
                message: format!("Failed to send email: {e}"),
            }
        })?;

        info!(
            recipient = recipient_email,
            piece = %order.art_piece_name,
            "Order request email sent"
        );

        Ok(())
    }
}
